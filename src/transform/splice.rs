//! Splicing collected replacements into the original buffer.

use super::Transformed;
use std::ops::Range;

/// A claimed byte range of the original buffer and the text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    start_byte: usize,
    end_byte: usize,
    original: String,
    replacement: String,
}

impl Replacement {
    pub fn new(range: Range<usize>, original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            start_byte: range.start,
            end_byte: range.end,
            original: original.into(),
            replacement: replacement.into(),
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }

    pub fn start_byte(&self) -> usize {
        self.start_byte
    }

    pub fn end_byte(&self) -> usize {
        self.end_byte
    }

    /// The text the range held before replacement.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Applies non-overlapping replacements to `source` in one pass.
///
/// Ranges are spliced from the rightmost start to the leftmost, so offsets of
/// ranges not yet applied stay valid. Ranges must be disjoint and lie within
/// `source`; any that do not are skipped.
pub fn apply_replacements(source: &[u8], mut replacements: Vec<Replacement>) -> Transformed {
    if replacements.is_empty() {
        return Transformed::unchanged(source);
    }

    replacements.sort_by(|a, b| b.start_byte.cmp(&a.start_byte));

    let mut content = source.to_vec();
    let mut floor = source.len();
    let mut changed = false;
    for replacement in &replacements {
        let Range { start, end } = replacement.range();
        if start > end || end > floor {
            tracing::warn!(start, end, "skipping replacement outside the unclaimed buffer");
            continue;
        }
        content.splice(start..end, replacement.replacement.bytes());
        floor = start;
        changed = true;
    }

    Transformed { content, changed }
}
