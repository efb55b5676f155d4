//! Splits a text body into lines the way the original differ does: on `\n`
//! only, with no CRLF normalization and no trailing-newline special-casing
//! beyond what falls out of a plain split.

/// Splits `text` on `\n`, keeping the newline out of each returned line.
///
/// A trailing `\n` produces a final empty line, same as
/// `explodeLines`/`boost::split` on the original text -- this is what lets
/// "same file, differs only in presence of a trailing newline" show up as a
/// genuine one-line diff instead of being silently swallowed.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }
    text.split('\n').collect()
}
