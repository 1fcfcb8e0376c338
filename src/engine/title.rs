//! Title extraction from the first page's largest text.

use std::collections::HashSet;

use crate::extract::PageText;

use super::classify::{fold_key, nfkc};
use super::config::HeuristicConfig;
use super::histogram::size_key;

/// Result of title extraction: the title (if the heuristic accepted one)
/// and the folded forms of its lines, used by the classifier to keep the
/// title from re-surfacing as a heading elsewhere in the document.
#[derive(Debug, Clone, Default)]
pub struct TitleExtraction {
    /// Extracted title, absent when the heuristic declined
    pub title: Option<String>,
    /// Folded comparison forms of the title lines
    pub segments: HashSet<String>,
}

/// Extract a title from the first page.
///
/// The title is taken to be the text set in the page's largest font: every
/// line whose spans all tie the maximum rounded size joins the title, in
/// visual order, separated by a double space. Candidates with fewer than
/// the configured minimum word count are declined; a lone large glyph or
/// decorative numeral is not a title.
pub fn extract_title(first_page: &PageText, config: &HeuristicConfig) -> TitleExtraction {
    let max_key = first_page
        .lines()
        .flat_map(|l| l.spans.iter())
        .map(|s| size_key(s.font_size))
        .max();

    let max_key = match max_key {
        Some(key) => key,
        None => return TitleExtraction::default(),
    };

    let mut parts: Vec<String> = Vec::new();
    for line in first_page.lines() {
        if line.is_empty() {
            continue;
        }
        // Partial-size lines are excluded: every span must tie the max
        if line.spans.iter().all(|s| size_key(s.font_size) == max_key) {
            parts.push(nfkc(&line.text()));
        }
    }

    let title = parts.join("  ");
    if title.split_whitespace().count() < config.title_min_words {
        log::debug!("title candidate {:?} below minimum word count, declined", title);
        return TitleExtraction::default();
    }

    let segments = parts.iter().map(|p| fold_key(p)).collect();
    TitleExtraction {
        title: Some(title),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{Block, Line, PageText, Span};

    fn page(lines: Vec<Line>) -> PageText {
        PageText::new(0, vec![Block::new(lines)])
    }

    fn line(spans: Vec<Span>) -> Line {
        Line::from_spans(spans)
    }

    fn span(text: &str, size: f32, y: f32) -> Span {
        Span::new(text, 10.0, y, size, "Helvetica")
    }

    #[test]
    fn test_extracts_largest_size_lines() {
        let config = HeuristicConfig::default();
        let result = extract_title(
            &page(vec![
                line(vec![span("Understanding the Rust", 24.0, 100.0)]),
                line(vec![span("Borrow Checker", 24.0, 80.0)]),
                line(vec![span("A practical companion", 14.0, 60.0)]),
            ]),
            &config,
        );

        assert_eq!(
            result.title.as_deref(),
            Some("Understanding the Rust  Borrow Checker")
        );
        assert_eq!(result.segments.len(), 2);
        assert!(result.segments.contains("borrowchecker"));
    }

    #[test]
    fn test_partial_size_lines_excluded() {
        let config = HeuristicConfig::default();
        // Second line mixes the max size with a smaller span: excluded
        let result = extract_title(
            &page(vec![
                line(vec![span("The Complete Field Manual", 24.0, 100.0)]),
                line(vec![span("Volume", 24.0, 80.0), span("II", 12.0, 80.0)]),
            ]),
            &config,
        );

        assert_eq!(result.title.as_deref(), Some("The Complete Field Manual"));
        assert_eq!(result.segments.len(), 1);
    }

    #[test]
    fn test_short_title_declined() {
        let config = HeuristicConfig::default();
        let result = extract_title(
            &page(vec![line(vec![span("Memo", 30.0, 100.0)])]),
            &config,
        );

        assert!(result.title.is_none());
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_empty_page_declines() {
        let config = HeuristicConfig::default();
        let result = extract_title(&PageText::empty(0), &config);
        assert!(result.title.is_none());
    }

    #[test]
    fn test_rounding_absorbs_jitter() {
        let config = HeuristicConfig::default();
        // 23.98 and 24.02 round to the same deci-point bucket
        let result = extract_title(
            &page(vec![
                line(vec![span("Advanced Network Protocol", 23.98, 100.0)]),
                line(vec![span("Design Notes", 24.02, 80.0)]),
            ]),
            &config,
        );

        assert_eq!(
            result.title.as_deref(),
            Some("Advanced Network Protocol  Design Notes")
        );
    }
}
