//! Multi-receipt segmentation of a raw text blob.

use super::rules::patterns::SEGMENT_SEPARATOR;

/// Split raw text into candidate receipt segments.
///
/// A separator is a line made solely of 3+ `-` or 3+ `=` characters.
/// Segments keep their original order; blank or whitespace-only chunks are
/// dropped. Text with no separator is a single candidate segment. Pure and
/// idempotent.
pub fn segment(raw_text: &str) -> Vec<&str> {
    SEGMENT_SEPARATOR
        .split(raw_text)
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}
