//! Heuristic configuration.
//!
//! Every cutoff the engine uses is named here. The defaults were tuned
//! empirically against mixed document corpora; treat them as tunable
//! parameters, not fixed truths.

/// Tunable thresholds for the outline inference heuristics.
#[derive(Debug, Clone)]
pub struct HeuristicConfig {
    /// A font size whose occurrence count exceeds this is a body-text
    /// candidate; the largest such size becomes the body-text threshold.
    pub body_popularity_cutoff: usize,

    /// Minimum word count for an extracted title; shorter candidates are
    /// declined in favor of the metadata/filename fallback.
    pub title_min_words: usize,

    /// Lines with fewer characters than this are never headings.
    pub min_heading_chars: usize,

    /// A block with more lines than this is a table candidate.
    pub table_min_lines: usize,

    /// Table candidate blocks whose average joined line length is below
    /// this are treated as tabular and excluded.
    pub table_short_line_len: f32,

    /// A single-page outline with more entries than this is a form candidate.
    pub form_min_headings: usize,

    /// Fraction of short headings above which a form candidate is suppressed.
    pub form_short_ratio: f32,

    /// A heading with at most this many words counts as short for the
    /// form-document test.
    pub form_short_words: usize,

    /// More than this many bare numbered labels ("1.", "2)") on a form
    /// candidate suppresses the outline.
    pub form_numeric_labels: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            body_popularity_cutoff: 30,
            title_min_words: 3,
            min_heading_chars: 2,
            table_min_lines: 4,
            table_short_line_len: 40.0,
            form_min_headings: 15,
            form_short_ratio: 0.6,
            form_short_words: 3,
            form_numeric_labels: 5,
        }
    }
}

impl HeuristicConfig {
    /// Create a config with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body-text popularity cutoff.
    pub fn with_body_popularity_cutoff(mut self, count: usize) -> Self {
        self.body_popularity_cutoff = count;
        self
    }

    /// Set the minimum title word count.
    pub fn with_title_min_words(mut self, words: usize) -> Self {
        self.title_min_words = words;
        self
    }

    /// Set the table detection cutoffs.
    pub fn with_table_cutoffs(mut self, min_lines: usize, short_line_len: f32) -> Self {
        self.table_min_lines = min_lines;
        self.table_short_line_len = short_line_len;
        self
    }

    /// Set the form-document detection cutoffs.
    pub fn with_form_cutoffs(mut self, min_headings: usize, short_ratio: f32) -> Self {
        self.form_min_headings = min_headings;
        self.form_short_ratio = short_ratio;
        self
    }
}
