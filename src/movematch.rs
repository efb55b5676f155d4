//! Detects lines that were deleted from one place and re-inserted elsewhere
//! (a "moved line"), so the renderer can cross-link them with word-level
//! highlighting instead of showing an unrelated add/delete pair.
//!
//! Matches are cached in an arena (`Vec<MoveEntry>` plus a `HashMap` index)
//! rather than linked by `Rc`, since a moved-line pair needs to be reachable
//! from both its delete-side and add-side coordinates and an arena sidesteps
//! any question of ownership cycles.

use std::collections::HashMap;

use similar::Algorithm;

use crate::diffadapter::{diff_words, DiffStep};
use crate::thai::ThaiSegmenter;
use crate::tokenizer::{tokenize, Word};

/// A confirmed moved-line pair: one delete-side line, one add-side line, and
/// the word-level diff between them.
pub struct MoveEntry<'a> {
    pub del_op_index: usize,
    pub del_line: usize,
    pub add_op_index: usize,
    pub add_line: usize,
    pub similarity: f64,
    pub old_words: Vec<Word<'a>>,
    pub new_words: Vec<Word<'a>>,
    pub word_steps: Vec<DiffStep>,
}

fn key(op_index: usize, line_no: usize) -> u64 {
    ((op_index as u64) << 32) | (line_no as u64)
}

fn token_len(range: (usize, usize)) -> u64 {
    (range.1 - range.0) as u64
}

/// `copy_tokens / total_tokens` over a word-level edit script, 0 if nothing
/// copied at all. Each op contributes word-token counts, not character
/// counts: del/copy -> `|from|`, add -> `|to|`, change -> `max(|from|,
/// |to|)`, matching the original's `diff[i].from.size()`/`to.size()` tally.
fn similarity(_old_words: &[Word<'_>], _new_words: &[Word<'_>], steps: &[DiffStep]) -> f64 {
    let mut copy_tokens = 0u64;
    let mut total_tokens = 0u64;
    for step in steps {
        match *step {
            DiffStep::Copy { old_range, .. } => {
                let n = token_len(old_range);
                copy_tokens += n;
                total_tokens += n;
            }
            DiffStep::Delete { old_range, .. } => {
                total_tokens += token_len(old_range);
            }
            DiffStep::Insert { new_range, .. } => {
                total_tokens += token_len(new_range);
            }
            DiffStep::Change { old_range, new_range } => {
                total_tokens += token_len(old_range).max(token_len(new_range));
            }
        }
    }
    if copy_tokens == 0 || total_tokens == 0 {
        0.0
    } else {
        copy_tokens as f64 / total_tokens as f64
    }
}

pub struct MoveMatcher<'a> {
    entries: Vec<MoveEntry<'a>>,
    cache: HashMap<u64, usize>,
    threshold: f64,
    algorithm: Algorithm,
    word_complexity_ceiling: u64,
}

impl<'a> MoveMatcher<'a> {
    pub fn new(threshold: f64, algorithm: Algorithm, word_complexity_ceiling: u64) -> Self {
        MoveMatcher {
            entries: Vec::new(),
            cache: HashMap::new(),
            threshold,
            algorithm,
            word_complexity_ceiling,
        }
    }

    pub fn entry(&self, idx: usize) -> &MoveEntry<'a> {
        &self.entries[idx]
    }

    /// Looks for a moved-line partner of the delete at `(op_index, line_no)`
    /// in `old_lines`, scanning the insert ops in `script`.
    pub fn find_moved_delete(
        &mut self,
        script: &[DiffStep],
        old_lines: &[&'a str],
        new_lines: &[&'a str],
        op_index: usize,
        line_no: usize,
        thai: &dyn ThaiSegmenter,
    ) -> Option<usize> {
        self.find_moved(script, old_lines, new_lines, op_index, line_no, true, thai)
    }

    /// Looks for a moved-line partner of the insert at `(op_index, line_no)`
    /// in `new_lines`, scanning the delete ops in `script`.
    pub fn find_moved_insert(
        &mut self,
        script: &[DiffStep],
        old_lines: &[&'a str],
        new_lines: &[&'a str],
        op_index: usize,
        line_no: usize,
        thai: &dyn ThaiSegmenter,
    ) -> Option<usize> {
        self.find_moved(script, old_lines, new_lines, op_index, line_no, false, thai)
    }

    fn find_moved(
        &mut self,
        script: &[DiffStep],
        old_lines: &[&'a str],
        new_lines: &[&'a str],
        op_index: usize,
        line_no: usize,
        is_delete: bool,
        thai: &dyn ThaiSegmenter,
    ) -> Option<usize> {
        let this_key = key(op_index, line_no);
        if let Some(&idx) = self.cache.get(&this_key) {
            return Some(idx);
        }

        let this_text = if is_delete { old_lines[line_no] } else { new_lines[line_no] };
        let this_words = tokenize(this_text, thai);

        let mut best: Option<(usize, usize, f64, Vec<Word<'a>>, Vec<Word<'a>>, Vec<DiffStep>)> = None;

        for (cand_idx, cand_op) in script.iter().enumerate() {
            let candidate_lines: Vec<usize> = match (is_delete, cand_op) {
                (true, DiffStep::Insert { new_range, .. }) => (new_range.0..new_range.1).collect(),
                (false, DiffStep::Delete { old_range, .. }) => (old_range.0..old_range.1).collect(),
                _ => Vec::new(),
            };

            for cand_line in candidate_lines {
                let cand_text = if is_delete { new_lines[cand_line] } else { old_lines[cand_line] };
                let cand_words = tokenize(cand_text, thai);

                let (old_words, new_words, steps) = if is_delete {
                    let steps = diff_words(&this_words, &cand_words, self.algorithm, self.word_complexity_ceiling);
                    (this_words.clone(), cand_words, steps)
                } else {
                    let steps = diff_words(&cand_words, &this_words, self.algorithm, self.word_complexity_ceiling);
                    (cand_words, this_words.clone(), steps)
                };

                let sim = similarity(&old_words, &new_words, &steps);
                let better = match &best {
                    None => true,
                    Some((_, _, best_sim, _, _, _)) => sim > *best_sim,
                };
                if better {
                    best = Some((cand_idx, cand_line, sim, old_words, new_words, steps));
                }
            }
        }

        let (cand_idx, cand_line, sim, old_words, new_words, word_steps) = best?;
        if sim <= self.threshold {
            return None;
        }

        let (del_op_index, del_line, add_op_index, add_line) = if is_delete {
            (op_index, line_no, cand_idx, cand_line)
        } else {
            (cand_idx, cand_line, op_index, line_no)
        };

        let entry = MoveEntry {
            del_op_index,
            del_line,
            add_op_index,
            add_line,
            similarity: sim,
            old_words,
            new_words,
            word_steps,
        };
        let idx = self.entries.len();
        self.entries.push(entry);
        self.cache.insert(key(del_op_index, del_line), idx);
        self.cache.insert(key(add_op_index, add_line), idx);
        log::debug!("moved line matched with similarity {:.3}", sim);
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffadapter::diff_lines;
    use crate::thai::NullThaiSegmenter;

    #[test]
    fn moved_line_is_detected_both_ways() {
        let old_lines = vec!["alpha", "the quick fox jumps"];
        let new_lines = vec!["the quick fox jumps", "beta"];
        let script = diff_lines(&old_lines, &new_lines, Algorithm::Myers);

        let mut matcher = MoveMatcher::new(0.25, Algorithm::Myers, 40_000_000);
        let del_op_index = script
            .iter()
            .position(|s| matches!(s, DiffStep::Delete { .. }))
            .unwrap();
        let add_op_index = script
            .iter()
            .position(|s| matches!(s, DiffStep::Insert { .. }))
            .unwrap();

        let idx = matcher
            .find_moved_delete(&script, &old_lines, &new_lines, del_op_index, 1, &NullThaiSegmenter)
            .expect("moved line should be found");
        assert!(matcher.entry(idx).similarity > 0.99);

        let idx2 = matcher
            .find_moved_insert(&script, &old_lines, &new_lines, add_op_index, 0, &NullThaiSegmenter)
            .expect("the cached lookup should hit from the add side too");
        assert_eq!(idx, idx2);
    }

    #[test]
    fn moved_line_cache_is_symmetric() {
        let old_lines = vec!["a totally unique sentence here"];
        let new_lines = vec!["a totally unique sentence here"];
        let script = diff_lines(&old_lines, &new_lines, Algorithm::Myers);
        let mut matcher = MoveMatcher::new(0.25, Algorithm::Myers, 40_000_000);

        // This line-level script has no del/add ops at all (it's a pure
        // copy), so instead exercise the cache directly with synthetic
        // coordinates to confirm both endpoint keys resolve to the same
        // arena slot once an entry is inserted.
        let del_key = key(3, 7);
        let add_key = key(9, 2);
        let entry = MoveEntry {
            del_op_index: 3,
            del_line: 7,
            add_op_index: 9,
            add_line: 2,
            similarity: 0.9,
            old_words: Vec::new(),
            new_words: Vec::new(),
            word_steps: Vec::new(),
        };
        matcher.entries.push(entry);
        matcher.cache.insert(del_key, 0);
        matcher.cache.insert(add_key, 0);

        assert_eq!(matcher.cache.get(&del_key), Some(&0));
        assert_eq!(matcher.cache.get(&add_key), Some(&0));
        let _ = script;
    }

    #[test]
    fn dissimilar_lines_are_not_matched() {
        let old_lines = vec!["alpha"];
        let new_lines = vec!["completely different content goes here"];
        let script = diff_lines(&old_lines, &new_lines, Algorithm::Myers);
        let del_op_index = script
            .iter()
            .position(|s| matches!(s, DiffStep::Delete { .. }))
            .unwrap();

        let mut matcher = MoveMatcher::new(0.25, Algorithm::Myers, 40_000_000);
        let found = matcher.find_moved_delete(&script, &old_lines, &new_lines, del_op_index, 0, &NullThaiSegmenter);
        assert!(found.is_none());
    }
}
