//! HTML table rendering: the `Renderer` trait seam plus its sole shipped
//! implementation, a 4-column table matching the original extension's
//! `TableDiff` markup.

use crate::diffadapter::DiffStep;
use crate::tokenizer::Word;

/// Emission surface the orchestrator drives. An inline (non-table) renderer
/// would implement this same trait; none ships here.
pub trait Renderer {
    fn emit_add(&mut self, line: &str);
    fn emit_delete(&mut self, line: &str);
    fn emit_context(&mut self, line: &str);
    fn emit_block_header(&mut self, from_line: usize, to_line: usize);
    fn emit_word_diff(&mut self, old_words: &[Word<'_>], new_words: &[Word<'_>], steps: &[DiffStep]);
    fn emit_word_diff_one_sided(&mut self, words: &[Word<'_>], steps: &[DiffStep], is_delete_side: bool);

    /// Finalizes and returns the rendered document.
    fn finish(self: Box<Self>) -> String;
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Wraps `text` in a `<div>` unless it's empty, matching the original
/// renderer's "empty lines get an empty cell, not an empty div" quirk.
fn div_wrapped(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("<div>{}</div>", escape(text))
    }
}

/// Renders word-level diff ops onto one side of a row.
///
/// `emit_from` selects whether `del`/`change` ops contribute their *from*
/// words wrapped in `<del>`; `emit_to` selects whether `add`/`change` ops
/// contribute their *to* words wrapped in `<ins>`. A plain two-sided
/// word-diff row sets both true on one call and both false-except-matching
/// on the other (see [`HtmlTableRenderer::emit_word_diff`]); a one-sided
/// moved-line row sets only the relevant one.
fn render_word_side(
    out: &mut String,
    old_words: &[Word<'_>],
    new_words: &[Word<'_>],
    steps: &[DiffStep],
    emit_from: bool,
    emit_to: bool,
) {
    for step in steps {
        match *step {
            DiffStep::Copy { old_range, new_range } => {
                // A copy's `from` and `to` ranges carry equal content, but on
                // a one-sided render only one of `old_words`/`new_words` is
                // actually populated (the other is an empty stand-in) -- so
                // pick whichever side this call is rendering rather than
                // always indexing `old_words`.
                if emit_to {
                    for w in &new_words[new_range.0..new_range.1] {
                        escape_into(out, w.whole());
                    }
                } else {
                    for w in &old_words[old_range.0..old_range.1] {
                        escape_into(out, w.whole());
                    }
                }
            }
            DiffStep::Delete { old_range, .. } => {
                if emit_from {
                    out.push_str(r#"<del class="diffchange diffchange-inline">"#);
                    for w in &old_words[old_range.0..old_range.1] {
                        escape_into(out, w.whole());
                    }
                    out.push_str("</del>");
                }
            }
            DiffStep::Insert { new_range, .. } => {
                if emit_to {
                    out.push_str(r#"<ins class="diffchange diffchange-inline">"#);
                    for w in &new_words[new_range.0..new_range.1] {
                        escape_into(out, w.whole());
                    }
                    out.push_str("</ins>");
                }
            }
            DiffStep::Change { old_range, new_range } => {
                if emit_from {
                    out.push_str(r#"<del class="diffchange diffchange-inline">"#);
                    for w in &old_words[old_range.0..old_range.1] {
                        escape_into(out, w.whole());
                    }
                    out.push_str("</del>");
                }
                if emit_to {
                    out.push_str(r#"<ins class="diffchange diffchange-inline">"#);
                    for w in &new_words[new_range.0..new_range.1] {
                        escape_into(out, w.whole());
                    }
                    out.push_str("</ins>");
                }
            }
        }
    }
}

/// A 4-column HTML table: left marker, left cell, right marker, right cell.
pub struct HtmlTableRenderer {
    out: String,
}

impl HtmlTableRenderer {
    /// `text1_len`/`text2_len` size the up-front reservation, matching the
    /// original renderer's `|text1| + |text2| + 10000` heuristic.
    pub fn new(text1_len: usize, text2_len: usize) -> Self {
        let mut out = String::with_capacity(text1_len + text2_len + 10_000);
        out.push_str("<table class=\"diff\">\n");
        HtmlTableRenderer { out }
    }

    fn row(&mut self, left_marker: &str, left_cell: &str, right_marker: &str, right_cell: &str) {
        self.out.push_str("<tr>");
        self.out.push_str("<td class=\"diff-marker\">");
        self.out.push_str(left_marker);
        self.out.push_str("</td><td class=\"diff-content\">");
        self.out.push_str(left_cell);
        self.out.push_str("</td><td class=\"diff-marker\">");
        self.out.push_str(right_marker);
        self.out.push_str("</td><td class=\"diff-content\">");
        self.out.push_str(right_cell);
        self.out.push_str("</td></tr>\n");
    }
}

impl Renderer for HtmlTableRenderer {
    fn emit_add(&mut self, line: &str) {
        let cell = div_wrapped(line);
        self.row("", "", "+", &cell);
    }

    fn emit_delete(&mut self, line: &str) {
        let cell = div_wrapped(line);
        self.row("\u{2212}", &cell, "", "");
    }

    fn emit_context(&mut self, line: &str) {
        let cell = div_wrapped(line);
        self.row("&#160;", &cell, "&#160;", &cell);
    }

    fn emit_block_header(&mut self, from_line: usize, to_line: usize) {
        self.out.push_str("<tr><td class=\"diff-lineno\" colspan=\"2\"><!--LINE ");
        self.out.push_str(&from_line.to_string());
        self.out.push_str("--></td><td class=\"diff-lineno\" colspan=\"2\"><!--LINE ");
        self.out.push_str(&to_line.to_string());
        self.out.push_str("--></td></tr>\n");
    }

    fn emit_word_diff(&mut self, old_words: &[Word<'_>], new_words: &[Word<'_>], steps: &[DiffStep]) {
        let mut left = String::new();
        render_word_side(&mut left, old_words, new_words, steps, true, false);
        let mut right = String::new();
        render_word_side(&mut right, old_words, new_words, steps, false, true);
        let left_cell = if left.is_empty() { String::new() } else { format!("<div>{}</div>", left) };
        let right_cell = if right.is_empty() { String::new() } else { format!("<div>{}</div>", right) };
        self.row("\u{2212}", &left_cell, "+", &right_cell);
    }

    fn emit_word_diff_one_sided(&mut self, words: &[Word<'_>], steps: &[DiffStep], is_delete_side: bool) {
        let empty: Vec<Word<'_>> = Vec::new();
        let mut side = String::new();
        if is_delete_side {
            render_word_side(&mut side, words, &empty, steps, true, false);
        } else {
            render_word_side(&mut side, &empty, words, steps, false, true);
        }
        let cell = if side.is_empty() { String::new() } else { format!("<div>{}</div>", side) };
        if is_delete_side {
            self.row("\u{2212}", &cell, "", "");
        } else {
            self.row("", "", "+", &cell);
        }
    }

    fn finish(self: Box<Self>) -> String {
        let mut out = self.out;
        out.push_str("</table>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_only_the_three_html_metacharacters() {
        assert_eq!(escape("a<b>c&d"), "a&lt;b&gt;c&amp;d");
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn empty_line_gets_no_div() {
        assert_eq!(div_wrapped(""), "");
        assert_eq!(div_wrapped("x"), "<div>x</div>");
    }

    #[test]
    fn add_row_has_empty_left_side() {
        let mut r = HtmlTableRenderer::new(0, 0);
        r.emit_add("hello");
        let html = Box::new(r).finish();
        assert!(html.contains("<div>hello</div>"));
        assert!(html.contains("+"));
    }

    #[test]
    fn context_row_repeats_same_cell_both_sides() {
        let mut r = HtmlTableRenderer::new(0, 0);
        r.emit_context("same");
        let html = Box::new(r).finish();
        assert_eq!(html.matches("<div>same</div>").count(), 2);
    }

    #[test]
    fn block_header_carries_line_numbers() {
        let mut r = HtmlTableRenderer::new(0, 0);
        r.emit_block_header(3, 7);
        let html = Box::new(r).finish();
        assert!(html.contains("<!--LINE 3-->"));
        assert!(html.contains("<!--LINE 7-->"));
    }
}
