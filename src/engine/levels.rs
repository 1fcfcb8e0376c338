//! Heading-level assignment from the font-size histogram.

use crate::model::HeadingLevel;

use super::config::HeuristicConfig;
use super::histogram::{key_size, FontHistogram};

/// Mapping from rounded font size to heading level.
///
/// At most three entries, strictly size-ordered: the size mapped to H1 is
/// larger than H2's, which is larger than H3's. Derived once per document
/// and immutable afterward.
#[derive(Debug, Clone, Default)]
pub struct LevelMap {
    /// (size key, level), sorted by size descending
    entries: Vec<(i32, HeadingLevel)>,
}

impl LevelMap {
    /// Derive the level map from a document's font histogram.
    ///
    /// Body text is assumed to be the largest size whose count exceeds the
    /// popularity cutoff. Sizes strictly above it become heading candidates,
    /// largest first; the top three get H1, H2, H3. With no size above the
    /// cutoff, the smallest observed size stands in as the body threshold so
    /// every larger size remains a candidate.
    pub fn from_histogram(hist: &FontHistogram, config: &HeuristicConfig) -> Self {
        if hist.is_empty() {
            return Self::default();
        }

        let body_key = hist
            .iter()
            .filter(|&(_, count)| count > config.body_popularity_cutoff)
            .map(|(key, _)| key)
            .max()
            .or_else(|| hist.min_key());

        let body_key = match body_key {
            Some(key) => key,
            None => return Self::default(),
        };

        let mut candidates: Vec<(i32, usize)> =
            hist.iter().filter(|&(key, _)| key > body_key).collect();
        candidates.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

        let entries = candidates
            .into_iter()
            .take(HeadingLevel::ALL.len())
            .zip(HeadingLevel::ALL)
            .map(|((key, _), level)| (key, level))
            .collect();

        log::debug!(
            "level map: body threshold {:.1}, {} heading sizes",
            key_size(body_key),
            hist.iter().filter(|&(key, _)| key > body_key).count()
        );

        Self { entries }
    }

    /// Look up the heading level for a rounded size.
    pub fn level_for(&self, size_key: i32) -> Option<HeadingLevel> {
        self.entries
            .iter()
            .find(|(key, _)| *key == size_key)
            .map(|(_, level)| *level)
    }

    /// The font size assigned to a level, if populated.
    pub fn size_for(&self, level: HeadingLevel) -> Option<f32> {
        self.entries
            .iter()
            .find(|(_, l)| *l == level)
            .map(|(key, _)| key_size(*key))
    }

    /// Number of populated levels (0–3).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no level is populated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
