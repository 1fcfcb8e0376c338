//! Font-size histogram.

use std::collections::HashMap;

/// Round a font size to one decimal place, stored as deci-point integer
/// keys (12.34 → 123). Absorbs floating-point jitter from the renderer.
pub fn size_key(size: f32) -> i32 {
    (size * 10.0).round() as i32
}

/// Convert a deci-point key back to a font size.
pub fn key_size(key: i32) -> f32 {
    key as f32 / 10.0
}

/// Occurrence counts per rounded font size, built once per document from
/// the spans in the scanned page range.
#[derive(Debug, Clone, Default)]
pub struct FontHistogram {
    counts: HashMap<i32, usize>,
}

impl FontHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one span's font size.
    pub fn observe(&mut self, font_size: f32) {
        *self.counts.entry(size_key(font_size)).or_insert(0) += 1;
    }

    /// Occurrence count for a rounded size.
    pub fn count(&self, key: i32) -> usize {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Total number of observed spans.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether no spans were observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Smallest observed size key.
    pub fn min_key(&self) -> Option<i32> {
        self.counts.keys().min().copied()
    }

    /// Iterate (size key, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }
}
