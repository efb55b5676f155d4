use std::fs;
use std::path::PathBuf;

use wikidiff2::{diff_to_html, DiffConfig, DiffError};

fn read_file(path: &str) -> Result<String, DiffError> {
    let path = PathBuf::from(path);
    let bytes = fs::read(&path).map_err(|source| DiffError::Io {
        path: path.clone(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| DiffError::InvalidUtf8 { path, source })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut files = Vec::new();
    let mut context = 2usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--context" => {
                i += 1;
                context = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--context requires a value"))?
                    .parse()?;
            }
            other => files.push(other.to_string()),
        }
        i += 1;
    }

    if files.len() != 2 {
        anyhow::bail!("usage: wikidiff2-cli <file1> <file2> [--context N]");
    }

    let text1 = read_file(&files[0])?;
    let text2 = read_file(&files[1])?;

    let config = DiffConfig::builder().num_context_lines(context).build();
    println!("{}", diff_to_html(&text1, &text2, &config));

    Ok(())
}
