//! Walks a line-level edit script and drives a [`Renderer`], consulting the
//! moved-line matcher for pure add/delete runs and the word-level adapter
//! for direct line-pair changes.

use similar::Algorithm;

use crate::diffadapter::{diff_words, DiffStep};
use crate::movematch::MoveMatcher;
use crate::render::Renderer;
use crate::thai::ThaiSegmenter;
use crate::tokenizer::tokenize;

/// Renders the line-level script `script` (diffing `old_lines` against
/// `new_lines`) onto `renderer`.
#[allow(clippy::too_many_arguments)]
pub fn orchestrate<'a>(
    old_lines: &[&'a str],
    new_lines: &[&'a str],
    script: &[DiffStep],
    renderer: &mut dyn Renderer,
    matcher: &mut MoveMatcher<'a>,
    thai: &dyn ThaiSegmenter,
    algorithm: Algorithm,
    word_ceiling: u64,
    num_context_lines: usize,
) {
    let mut from_index = 1usize;
    let mut to_index = 1usize;
    let mut show_line_number = true;

    if let Some(first) = script.first() {
        if !matches!(first, DiffStep::Copy { .. }) {
            renderer.emit_block_header(1, 1);
        }
    }

    let last_op_index = script.len().saturating_sub(1);

    for (op_index, step) in script.iter().enumerate() {
        let is_last_op = op_index == last_op_index;

        match *step {
            DiffStep::Insert { new_range, .. } => {
                for line_no in new_range.0..new_range.1 {
                    match matcher.find_moved_insert(script, old_lines, new_lines, op_index, line_no, thai) {
                        Some(idx) => {
                            let entry = matcher.entry(idx);
                            renderer.emit_word_diff_one_sided(&entry.new_words, &entry.word_steps, false);
                        }
                        None => renderer.emit_add(new_lines[line_no]),
                    }
                }
                to_index += new_range.1 - new_range.0;
            }

            DiffStep::Delete { old_range, .. } => {
                for line_no in old_range.0..old_range.1 {
                    match matcher.find_moved_delete(script, old_lines, new_lines, op_index, line_no, thai) {
                        Some(idx) => {
                            let entry = matcher.entry(idx);
                            renderer.emit_word_diff_one_sided(&entry.old_words, &entry.word_steps, true);
                        }
                        None => renderer.emit_delete(old_lines[line_no]),
                    }
                }
                from_index += old_range.1 - old_range.0;
            }

            DiffStep::Copy { old_range, .. } => {
                let n = old_range.1 - old_range.0;
                let is_first_op = op_index == 0;
                for i in 0..n {
                    let is_head_context = !is_first_op && i < num_context_lines;
                    let is_tail_context = !is_last_op && i + num_context_lines >= n;
                    if is_head_context || is_tail_context {
                        if show_line_number {
                            renderer.emit_block_header(from_index, to_index);
                            show_line_number = false;
                        }
                        renderer.emit_context(old_lines[old_range.0 + i]);
                    } else {
                        show_line_number = true;
                    }
                    from_index += 1;
                    to_index += 1;
                }
            }

            DiffStep::Change { old_range, new_range } => {
                let from_len = old_range.1 - old_range.0;
                let to_len = new_range.1 - new_range.0;
                let n = from_len.min(to_len);

                for i in 0..n {
                    let old_line = old_lines[old_range.0 + i];
                    let new_line = new_lines[new_range.0 + i];
                    let old_words = tokenize(old_line, thai);
                    let new_words = tokenize(new_line, thai);
                    let word_steps = diff_words(&old_words, &new_words, algorithm, word_ceiling);
                    renderer.emit_word_diff(&old_words, &new_words, &word_steps);
                }

                if from_len > to_len {
                    for i in n..from_len {
                        renderer.emit_delete(old_lines[old_range.0 + i]);
                    }
                } else {
                    for i in n..to_len {
                        renderer.emit_add(new_lines[new_range.0 + i]);
                    }
                }

                from_index += from_len;
                to_index += to_len;
            }
        }

        show_line_number = false;
    }
}
