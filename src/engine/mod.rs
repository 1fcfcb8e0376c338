//! Outline inference engine.
//!
//! The engine consumes extracted page text and produces a `DocumentOutline`
//! in two passes: a histogram pass that estimates body text and derives the
//! heading-level map, then a classification pass that walks every in-scope
//! line. All state is scoped to a single document.

mod classify;
mod config;
mod filters;
mod histogram;
mod levels;
mod title;

pub use classify::{fold_key, nfkc, LineClassifier};
pub use config::HeuristicConfig;
pub use filters::{is_likely_form, is_table_block};
pub use histogram::{key_size, size_key, FontHistogram};
pub use levels::LevelMap;
pub use title::{extract_title, TitleExtraction};

use crate::extract::PageText;
use crate::model::DocumentOutline;

/// Last-resort title when extraction declines and no metadata or filename
/// is available (e.g. outlining raw bytes).
const UNTITLED: &str = "Untitled";

/// Infers a document outline from extracted page text.
#[derive(Debug, Clone, Default)]
pub struct OutlineEngine {
    config: HeuristicConfig,
}

impl OutlineEngine {
    /// Create an engine with default heuristics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom heuristics.
    pub fn with_config(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Infer the outline of one document.
    ///
    /// `metadata_title` and `fallback_title` (typically the filename stem)
    /// back up the typographic title extraction, in that order. A document
    /// with no extractable text yields an empty outline and a fallback
    /// title; it is not an error.
    ///
    /// Heading scanning starts at page 1 for multi-page documents (the
    /// title page is skipped entirely) and at page 0 when the title page
    /// is the only page.
    pub fn infer(
        &self,
        pages: &[PageText],
        metadata_title: Option<&str>,
        fallback_title: Option<&str>,
    ) -> DocumentOutline {
        let extracted = pages
            .first()
            .map(|p| extract_title(p, &self.config))
            .unwrap_or_default();

        let scan_start = if pages.len() > 1 { 1 } else { 0 };
        let in_scope = &pages[scan_start.min(pages.len())..];

        // Pass 1: font-size histogram over in-scope spans, tables excluded
        let mut hist = FontHistogram::new();
        for page in in_scope {
            for block in &page.blocks {
                if is_table_block(block, &self.config) {
                    continue;
                }
                for line in &block.lines {
                    for span in &line.spans {
                        hist.observe(span.font_size);
                    }
                }
            }
        }
        let levels = LevelMap::from_histogram(&hist, &self.config);
        log::debug!(
            "histogram: {} spans, {} heading levels",
            hist.total(),
            levels.len()
        );

        // Pass 2: classify lines into headings
        let mut classifier = LineClassifier::new(&levels, &self.config, &extracted.segments);
        for page in in_scope {
            classifier.visit_page(page);
        }
        let mut outline = classifier.finish();

        if is_likely_form(&outline, &self.config) {
            log::debug!("outline discarded: document looks like a form");
            outline.clear();
        }

        let title = extracted
            .title
            .or_else(|| metadata_title.map(str::to_string))
            .or_else(|| fallback_title.map(str::to_string))
            .unwrap_or_else(|| UNTITLED.to_string());

        DocumentOutline { title, outline }
    }
}
