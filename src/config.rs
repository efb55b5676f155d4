//! Builder-style configuration, modeled on `similar::TextDiffConfig` and this
//! repo's own `Default`-driven config structs: sensible defaults you can
//! override field by field before calling [`crate::diff_to_html`].

use similar::Algorithm;

use crate::thai::{NullThaiSegmenter, ThaiSegmenter};

/// Tunables for a single diff run.
pub struct DiffConfig {
    /// Number of unchanged lines to keep around each change for context.
    pub num_context_lines: usize,
    /// Minimum word-level similarity (exclusive) for two del/add lines to be
    /// rendered as a moved-line pair instead of a plain add and delete.
    pub move_similarity_threshold: f64,
    /// Upper bound on `old_words.len() * new_words.len()` before a word-diff
    /// falls back to a single whole-line replace.
    pub max_word_diff_complexity: u64,
    /// Edit-script algorithm used for both the line-level and word-level
    /// diffs.
    pub algorithm: Algorithm,
    /// Dictionary segmenter consulted for lines containing Thai script.
    pub thai_segmenter: Box<dyn ThaiSegmenter>,
}

impl DiffConfig {
    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder::default()
    }
}

impl Default for DiffConfig {
    fn default() -> Self {
        DiffConfig {
            num_context_lines: 2,
            move_similarity_threshold: 0.25,
            max_word_diff_complexity: 40_000_000,
            algorithm: Algorithm::Myers,
            thai_segmenter: Box::new(NullThaiSegmenter),
        }
    }
}

/// Builder for [`DiffConfig`]. Every setter is optional; the built config
/// falls back to [`DiffConfig::default`] for anything left untouched.
#[derive(Default)]
pub struct DiffConfigBuilder {
    num_context_lines: Option<usize>,
    move_similarity_threshold: Option<f64>,
    max_word_diff_complexity: Option<u64>,
    algorithm: Option<Algorithm>,
    thai_segmenter: Option<Box<dyn ThaiSegmenter>>,
}

impl DiffConfigBuilder {
    pub fn num_context_lines(mut self, n: usize) -> Self {
        self.num_context_lines = Some(n);
        self
    }

    pub fn move_similarity_threshold(mut self, t: f64) -> Self {
        self.move_similarity_threshold = Some(t);
        self
    }

    pub fn max_word_diff_complexity(mut self, c: u64) -> Self {
        self.max_word_diff_complexity = Some(c);
        self
    }

    pub fn algorithm(mut self, a: Algorithm) -> Self {
        self.algorithm = Some(a);
        self
    }

    pub fn thai_segmenter(mut self, seg: Box<dyn ThaiSegmenter>) -> Self {
        self.thai_segmenter = Some(seg);
        self
    }

    pub fn build(self) -> DiffConfig {
        let default = DiffConfig::default();
        DiffConfig {
            num_context_lines: self.num_context_lines.unwrap_or(default.num_context_lines),
            move_similarity_threshold: self
                .move_similarity_threshold
                .unwrap_or(default.move_similarity_threshold),
            max_word_diff_complexity: self
                .max_word_diff_complexity
                .unwrap_or(default.max_word_diff_complexity),
            algorithm: self.algorithm.unwrap_or(default.algorithm),
            thai_segmenter: self.thai_segmenter.unwrap_or(default.thai_segmenter),
        }
    }
}
