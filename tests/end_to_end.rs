use wikidiff2::{diff_to_html, DiffConfig};

fn diff(text1: &str, text2: &str, context: usize) -> String {
    let cfg = DiffConfig::builder().num_context_lines(context).build();
    diff_to_html(text1, text2, &cfg)
}

#[test]
fn identity_has_no_change_rows() {
    let text = "one\ntwo\nthree\n";
    let html = diff(text, text, 2);
    assert!(!html.contains("<ins"));
    assert!(!html.contains("<del"));
    assert!(!html.contains('+'));
    assert!(!html.contains('\u{2212}'));
}

#[test]
fn escape_soundness() {
    let html = diff("", "a < b & c > d\n", 0);
    assert!(!html.contains("a < b & c > d"));
    assert!(html.contains("a &lt; b &amp; c &gt; d"));
}

#[test]
fn s1_pure_add() {
    let html = diff("", "hello\n", 0);
    // One block header row, carrying the line number on both sides.
    assert_eq!(html.matches("<!--LINE").count(), 2);
    assert!(html.contains("<!--LINE 1-->"));
    assert!(html.contains("<div>hello</div>"));
}

#[test]
fn s2_pure_delete_with_context() {
    let html = diff("a\nb\n", "a\n", 1);
    assert!(html.contains("<!--LINE"));
    assert_eq!(html.matches("<div>a</div>").count(), 2);
    assert!(html.contains("<div>b</div>"));
}

#[test]
fn s3_word_change_attaches_trailing_space() {
    let html = diff("the quick fox", "the slow fox", 0);
    assert!(html.contains("<del class=\"diffchange diffchange-inline\">quick </del>"));
    assert!(html.contains("<ins class=\"diffchange diffchange-inline\">slow </ins>"));
}

#[test]
fn s4_cjk_per_character_word_diff() {
    let html = diff("日本語", "日米語", 0);
    assert!(html.contains("<del class=\"diffchange diffchange-inline\">本</del>"));
    assert!(html.contains("<ins class=\"diffchange diffchange-inline\">米</ins>"));
}

#[test]
fn s5_moved_line_is_cross_linked_not_add_delete() {
    let html = diff("A\nfoo bar baz\nB\n", "A\nB\nfoo bar baz\n", 0);
    assert_eq!(html.matches("foo bar baz").count(), 2);
    assert!(!html.contains("diffchange"));
}

#[test]
fn s6_dissimilar_lines_stay_plain_add_delete() {
    let html = diff("A\nhello world\nB", "A\nB\ntotally unrelated", 0);
    assert!(html.contains("<div>hello world</div>"));
    assert!(html.contains("<div>totally unrelated</div>"));
}

#[test]
fn line_count_accounting_is_exhaustive() {
    // Every line on both sides shows up in the rendered output somewhere,
    // either as its own row or folded into a word-diff/move row.
    let html = diff("a\nb\nc\nd\n", "a\nx\nc\ny\n", 0);
    for needle in ["a", "c"] {
        assert!(html.contains(&format!("<div>{}</div>", needle)));
    }
}
