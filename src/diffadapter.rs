//! Wraps the `similar` crate's edit-script engine and maps its vocabulary
//! onto this crate's: `Equal` is a copy, `Delete`/`Insert` are one-sided
//! changes, `Replace` is a change with content on both sides.

use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::tokenizer::Word;

/// One step of an edit script over some sequence of items.
///
/// This is `similar::DiffOp` under a name that matches the rest of this
/// crate's vocabulary instead of `similar`'s; `old_range`/`new_range` carry
/// the same half-open index ranges `similar` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStep {
    Copy { old_range: (usize, usize), new_range: (usize, usize) },
    Delete { old_range: (usize, usize), new_index: usize },
    Insert { old_index: usize, new_range: (usize, usize) },
    Change { old_range: (usize, usize), new_range: (usize, usize) },
}

impl DiffStep {
    pub fn old_range(&self) -> (usize, usize) {
        match *self {
            DiffStep::Copy { old_range, .. } => old_range,
            DiffStep::Delete { old_range, .. } => old_range,
            DiffStep::Insert { old_index, .. } => (old_index, old_index),
            DiffStep::Change { old_range, .. } => old_range,
        }
    }

    pub fn new_range(&self) -> (usize, usize) {
        match *self {
            DiffStep::Copy { new_range, .. } => new_range,
            DiffStep::Delete { new_index, .. } => (new_index, new_index),
            DiffStep::Insert { new_range, .. } => new_range,
            DiffStep::Change { new_range, .. } => new_range,
        }
    }
}

fn from_similar_op(op: DiffOp) -> DiffStep {
    match op {
        DiffOp::Equal { old_index, new_index, len } => DiffStep::Copy {
            old_range: (old_index, old_index + len),
            new_range: (new_index, new_index + len),
        },
        DiffOp::Delete { old_index, old_len, new_index } => DiffStep::Delete {
            old_range: (old_index, old_index + old_len),
            new_index,
        },
        DiffOp::Insert { old_index, new_index, new_len } => DiffStep::Insert {
            old_index,
            new_range: (new_index, new_index + new_len),
        },
        DiffOp::Replace { old_index, old_len, new_index, new_len } => DiffStep::Change {
            old_range: (old_index, old_index + old_len),
            new_range: (new_index, new_index + new_len),
        },
    }
}

/// Diffs two slices of lines, returning the edit script in source order.
pub fn diff_lines<'a>(old: &[&'a str], new: &[&'a str], algorithm: Algorithm) -> Vec<DiffStep> {
    capture_diff_slices(algorithm, old, new)
        .into_iter()
        .map(from_similar_op)
        .collect()
}

/// Diffs two word sequences, subject to a complexity ceiling.
///
/// `similar`'s Myers implementation is worst-case quadratic in the product of
/// the two sequence lengths. A pathological pair of long, highly dissimilar
/// lines (huge tables, minified code) can make that product enormous, so
/// before calling into `similar` this checks `old.len() * new.len()` against
/// `ceiling` and, if it's exceeded, returns a single synthetic [`DiffStep::Change`]
/// spanning both sequences whole -- the same fallback the original differ
/// uses when its own line-length heuristic trips.
pub fn diff_words(old: &[Word<'_>], new: &[Word<'_>], algorithm: Algorithm, ceiling: u64) -> Vec<DiffStep> {
    let product = old.len() as u64 * new.len() as u64;
    if product > ceiling {
        log::warn!(
            "word-diff complexity {} exceeds ceiling {}, falling back to whole-line replace",
            product,
            ceiling
        );
        return vec![DiffStep::Change {
            old_range: (0, old.len()),
            new_range: (0, new.len()),
        }];
    }
    capture_diff_slices(algorithm, old, new)
        .into_iter()
        .map(from_similar_op)
        .collect()
}
