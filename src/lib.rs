//! Three-level line/word wiki-style text differ.
//!
//! Diffing runs line-level first, then re-diffs each changed line pair
//! word-by-word, and separately tries to recognize lines that moved rather
//! than changed. The result is rendered as an HTML table matching the
//! original extension's markup.
//!
//! ```
//! use wikidiff2::{diff_to_html, DiffConfig};
//!
//! let html = diff_to_html("the quick fox", "the slow fox", &DiffConfig::default());
//! assert!(html.contains("diffchange"));
//! ```

pub mod classify;
pub mod codepoint;
pub mod config;
pub mod diffadapter;
pub mod error;
pub mod linesplit;
pub mod movematch;
pub mod orchestrator;
pub mod render;
pub mod thai;
pub mod tokenizer;

pub use config::{DiffConfig, DiffConfigBuilder};
pub use error::DiffError;
pub use thai::ThaiSegmenter;

use diffadapter::diff_lines;
use linesplit::split_lines;
use movematch::MoveMatcher;
use render::{HtmlTableRenderer, Renderer};

/// Diffs `text1` against `text2` and returns the rendered HTML table.
///
/// This never fails: pathological input degrades gracefully (an
/// over-complex line falls back to a whole-line replace; unrecognized code
/// points are classified as non-letters) rather than returning an error.
pub fn diff_to_html(text1: &str, text2: &str, config: &DiffConfig) -> String {
    let old_lines = split_lines(text1);
    let new_lines = split_lines(text2);

    let script = diff_lines(&old_lines, &new_lines, config.algorithm);

    let mut matcher = MoveMatcher::new(
        config.move_similarity_threshold,
        config.algorithm,
        config.max_word_diff_complexity,
    );

    let renderer = HtmlTableRenderer::new(text1.len(), text2.len());
    let mut renderer: Box<dyn Renderer> = Box::new(renderer);

    orchestrator::orchestrate(
        &old_lines,
        &new_lines,
        &script,
        renderer.as_mut(),
        &mut matcher,
        config.thai_segmenter.as_ref(),
        config.algorithm,
        config.max_word_diff_complexity,
        config.num_context_lines,
    );

    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_produces_no_change_markers() {
        let text = "alpha\nbeta\ngamma\n";
        let html = diff_to_html(text, text, &DiffConfig::default());
        assert!(!html.contains("<ins"));
        assert!(!html.contains("<del"));
        assert!(!html.contains('+'));
        assert!(!html.contains('\u{2212}'));
    }

    #[test]
    fn escapes_html_metacharacters_from_input() {
        let html = diff_to_html("", "<script>&\"\n", &DiffConfig::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;&amp;"));
    }

    #[test]
    fn pure_addition_scenario() {
        let cfg = DiffConfig::builder().num_context_lines(0).build();
        let html = diff_to_html("", "hello\n", &cfg);
        assert!(html.contains("<!--LINE 1-->"));
        assert!(html.contains("<div>hello</div>"));
    }
}
