//! Errors at the CLI's I/O boundary.
//!
//! [`crate::diff_to_html`] itself is infallible -- it always produces *some*
//! HTML, even for pathological input -- so `DiffError` only exists to carry
//! the failure modes around getting two files' worth of text in the first
//! place.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DiffError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
