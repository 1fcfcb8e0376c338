//! Line classification: turns in-scope lines into heading entries.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::extract::{Line, PageText};
use crate::model::HeadingEntry;

use super::config::HeuristicConfig;
use super::filters::is_table_block;
use super::histogram::size_key;
use super::levels::LevelMap;

/// Apply Unicode canonical-compatibility normalization (NFKC), making
/// multilingual and compatibility-form text stable for comparison.
pub fn nfkc(text: &str) -> String {
    text.nfkc().collect()
}

/// Folded comparison form: NFKC, lower-cased, all whitespace removed.
/// Headings and title segments are deduplicated on this key.
pub fn fold_key(text: &str) -> String {
    text.nfkc()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Walks pages in scope and emits heading entries in document order.
///
/// Owns the per-document dedup set: the first occurrence of a normalized
/// heading form wins, later duplicates on any page are dropped, and lines
/// matching the title's segments are suppressed entirely.
pub struct LineClassifier<'a> {
    levels: &'a LevelMap,
    config: &'a HeuristicConfig,
    title_segments: &'a HashSet<String>,
    seen: HashSet<String>,
    entries: Vec<HeadingEntry>,
}

impl<'a> LineClassifier<'a> {
    /// Create a classifier for one document pass.
    pub fn new(
        levels: &'a LevelMap,
        config: &'a HeuristicConfig,
        title_segments: &'a HashSet<String>,
    ) -> Self {
        Self {
            levels,
            config,
            title_segments,
            seen: HashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Classify every line on a page, skipping detected table blocks.
    pub fn visit_page(&mut self, page: &PageText) {
        for block in &page.blocks {
            if is_table_block(block, self.config) {
                log::debug!(
                    "page {}: skipping table block with {} lines",
                    page.index,
                    block.lines.len()
                );
                continue;
            }
            for line in &block.lines {
                self.visit_line(line, page.index);
            }
        }
    }

    fn visit_line(&mut self, line: &Line, page_index: usize) {
        let joined = line.text();
        if joined.chars().count() < self.config.min_heading_chars {
            return;
        }

        let text = nfkc(&joined);

        let level = match self.levels.level_for(size_key(line.max_font_size())) {
            Some(level) => level,
            None => return,
        };

        let key = fold_key(&text);
        if self.title_segments.contains(&key) {
            return;
        }
        if !self.seen.insert(key) {
            return;
        }

        self.entries.push(HeadingEntry::new(level, text, page_index));
    }

    /// Consume the classifier, returning entries in emission order.
    pub fn finish(self) -> Vec<HeadingEntry> {
        self.entries
    }
}
