//! Splits a line of text into language-aware word tokens.
//!
//! A [`Word`] is a run of letters, a single CJK ideograph, or a single piece
//! of punctuation, with any immediately-following ASCII space/tab folded in
//! as a trailing "suffix" rather than becoming its own token. Concatenating
//! every word's [`Word::whole`] reproduces the source line exactly.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::classify::{is_letter, is_space, to_tis620, THCHAR_ERR};
use crate::codepoint::CodePoints;
use crate::thai::ThaiSegmenter;

/// A single word token, borrowing its source line.
///
/// `start..brk` is the token's semantic content; `brk..end` is any trailing
/// ASCII whitespace swallowed into the token. Equality and hashing consider
/// the whole `start..end` span, so `"foo "` and `"foo  "` are distinct
/// tokens -- this is what lets [`Word`] be fed directly to
/// `similar::capture_diff_slices` and get the spec's word-diff semantics for
/// free.
#[derive(Clone, Copy)]
pub struct Word<'a> {
    source: &'a str,
    start: usize,
    brk: usize,
    end: usize,
}

impl<'a> Word<'a> {
    /// The full token, including any trailing whitespace.
    pub fn whole(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// The token without its trailing whitespace.
    pub fn core(&self) -> &'a str {
        &self.source[self.start..self.brk]
    }
}

impl PartialEq for Word<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.whole() == other.whole()
    }
}

impl Eq for Word<'_> {}

impl Hash for Word<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.whole().hash(state);
    }
}

impl std::fmt::Debug for Word<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({:?})", self.whole())
    }
}

/// Tokenizes `text` into words, optionally consulting a Thai segmenter.
///
/// `text` is expected to be a single line (no embedded `\n`), but nothing
/// here actually depends on that.
pub fn tokenize<'a>(text: &'a str, thai: &dyn ThaiSegmenter) -> Vec<Word<'a>> {
    let code_points: Vec<_> = CodePoints::new(text).collect();
    let n = code_points.len();
    if n == 0 {
        return Vec::new();
    }

    let mut tis620 = Vec::with_capacity(n);
    let mut has_thai = false;
    for cp in &code_points {
        let byte = to_tis620(cp.value);
        if byte >= 0x80 && byte != THCHAR_ERR {
            has_thai = true;
        }
        tis620.push(byte);
    }

    // A break opens a new word at code-point index `i`. Letters open a new
    // word right after a non-letter run; non-letters always open their own
    // single-code-point word -- *except* ASCII space/tab, which never
    // starts a break of its own and is instead folded into the preceding
    // word's trailing suffix by the emission walk below (it still counts
    // as "non-letter" for the following code point's break decision).
    let mut breaks: BTreeSet<usize> = BTreeSet::new();
    let mut prev_is_letter = true;
    for (i, cp) in code_points.iter().enumerate() {
        let letter = is_letter(cp.value);
        let space = is_space(cp.value);
        if letter {
            if !prev_is_letter {
                breaks.insert(i);
            }
        } else if !space {
            breaks.insert(i);
        }
        prev_is_letter = letter;
    }

    if has_thai {
        for pos in thai.breaks(&tis620) {
            if pos <= n {
                breaks.insert(pos);
            }
        }
    }

    // Synthetic break past the last code point so the final word is emitted
    // by the same logic as every other word.
    breaks.insert(n);

    let byte_at = |idx: usize| -> usize {
        if idx < n {
            code_points[idx].start
        } else {
            text.len()
        }
    };

    let mut words = Vec::with_capacity(breaks.len());
    let mut word_start = 0usize;
    let mut suffix_start: Option<usize> = None;

    for idx in 0..=n {
        let p = byte_at(idx);
        if idx < n && is_space(code_points[idx].value) {
            suffix_start = Some(p);
        }
        // A break at code-point index 0 would emit an empty leading word.
        if idx != 0 && breaks.contains(&idx) {
            let brk = suffix_start.unwrap_or(p);
            words.push(Word {
                source: text,
                start: word_start,
                brk,
                end: p,
            });
            suffix_start = None;
            word_start = p;
        }
    }

    words
}
