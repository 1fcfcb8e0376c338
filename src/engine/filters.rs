//! Noise filters: table blocks and form-like documents.

use regex::Regex;

use crate::extract::Block;
use crate::model::HeadingEntry;

use super::config::HeuristicConfig;

/// Decide whether a block is probably tabular.
///
/// Many short lines in one layout region typically means table cells, not
/// prose headings; such blocks are excluded from both the font histogram
/// and the classifier.
pub fn is_table_block(block: &Block, config: &HeuristicConfig) -> bool {
    if block.lines.len() <= config.table_min_lines {
        return false;
    }

    let total_len: usize = block
        .lines
        .iter()
        .map(|l| l.text().chars().count())
        .sum();
    let avg_len = total_len as f32 / block.lines.len() as f32;

    avg_len < config.table_short_line_len
}

/// Decide whether an outline looks like it came from a form document.
///
/// Forms produce dense single-page pseudo-headings: field labels and
/// numbered boxes all set in display sizes. The whole outline is suppressed
/// when every entry falls on one page, the entry count is high, and the
/// entries are dominated by short texts or bare numbered labels.
pub fn is_likely_form(entries: &[HeadingEntry], config: &HeuristicConfig) -> bool {
    if entries.len() <= config.form_min_headings {
        return false;
    }

    let first_page = entries[0].page;
    if !entries.iter().all(|e| e.page == first_page) {
        return false;
    }

    let short = entries
        .iter()
        .filter(|e| e.text.split_whitespace().count() <= config.form_short_words)
        .count();
    let short_ratio = short as f32 / entries.len() as f32;
    if short_ratio > config.form_short_ratio {
        log::debug!(
            "form suppression: {}/{} short headings on page {}",
            short,
            entries.len(),
            first_page
        );
        return true;
    }

    let numbered = Regex::new(r"^\d+[.)]?$").unwrap();
    let labels = entries
        .iter()
        .filter(|e| numbered.is_match(e.text.trim()))
        .count();
    if labels > config.form_numeric_labels {
        log::debug!(
            "form suppression: {} numbered labels on page {}",
            labels,
            first_page
        );
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{Line, Span};
    use crate::model::{HeadingEntry, HeadingLevel};

    fn short_line(text: &str, y: f32) -> Line {
        Line::from_spans(vec![Span::new(text, 10.0, y, 12.0, "Helvetica")])
    }

    fn entry(text: &str, page: usize) -> HeadingEntry {
        HeadingEntry::new(HeadingLevel::H1, text, page)
    }

    #[test]
    fn test_many_short_lines_is_table() {
        let block = Block::new(vec![
            short_line("abc", 100.0),
            short_line("def", 90.0),
            short_line("ghi", 80.0),
            short_line("jkl", 70.0),
            short_line("mno", 60.0),
            short_line("pqr", 50.0),
        ]);
        assert!(is_table_block(&block, &HeuristicConfig::default()));
    }

    #[test]
    fn test_few_lines_is_not_table() {
        let block = Block::new(vec![
            short_line("abc", 100.0),
            short_line("def", 90.0),
            short_line("ghi", 80.0),
        ]);
        assert!(!is_table_block(&block, &HeuristicConfig::default()));
    }

    #[test]
    fn test_long_lines_are_not_table() {
        let prose = "This paragraph line is comfortably longer than the cutoff";
        let block = Block::new(vec![
            short_line(prose, 100.0),
            short_line(prose, 90.0),
            short_line(prose, 80.0),
            short_line(prose, 70.0),
            short_line(prose, 60.0),
            short_line(prose, 50.0),
        ]);
        assert!(!is_table_block(&block, &HeuristicConfig::default()));
    }

    #[test]
    fn test_form_detected_by_numbered_labels() {
        let config = HeuristicConfig::default();
        // Short ratio stays under the cutoff; the bare labels alone trip it
        let mut entries: Vec<HeadingEntry> =
            (1..=6).map(|i| entry(&format!("{})", i), 0)).collect();
        entries.extend(
            (0..14).map(|i| entry(&format!("Section covering form topic number {}", i), 0)),
        );

        assert!(is_likely_form(&entries, &config));
    }

    #[test]
    fn test_form_detected_by_short_ratio() {
        let config = HeuristicConfig::default();
        let mut entries: Vec<HeadingEntry> = (0..14)
            .map(|i| entry(&format!("Field {}", i), 0))
            .collect();
        entries.extend((0..6).map(|i| entry(&format!("Longer heading number {} here", i), 0)));

        assert!(is_likely_form(&entries, &config));
    }

    #[test]
    fn test_multi_page_outline_is_not_form() {
        let config = HeuristicConfig::default();
        let entries: Vec<HeadingEntry> = (0..30).map(|i| entry(&format!("{}.", i), i % 3)).collect();
        assert!(!is_likely_form(&entries, &config));
    }

    #[test]
    fn test_small_outline_is_not_form() {
        let config = HeuristicConfig::default();
        let entries: Vec<HeadingEntry> = (0..10).map(|i| entry(&format!("{}.", i), 0)).collect();
        assert!(!is_likely_form(&entries, &config));
    }

    #[test]
    fn test_substantial_single_page_outline_survives() {
        let config = HeuristicConfig::default();
        // Plenty of entries on one page, but wordy ones: not a form
        let entries: Vec<HeadingEntry> = (0..20)
            .map(|i| entry(&format!("Detailed discussion of topic number {}", i), 0))
            .collect();
        assert!(!is_likely_form(&entries, &config));
    }
}
