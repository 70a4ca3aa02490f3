//! Splitting annotation offsets at line breaks
//!
//! A rendered fragment cannot span more than one visual line, so every
//! annotation range that crosses a line break is split into one range per
//! line before any fragment is created.

use super::document_text::DocumentText;
use crate::models::offsets::{Offsets, OffsetsList};
use serde::{Deserialize, Serialize};

/// Characters that end a visual line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentationConfig {
    /// Each listed character is an independent break, so "\r\n" counts twice
    pub line_breaks: Vec<char>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            line_breaks: vec!['\n', '\r'],
        }
    }
}

/// Line-safe offsets derived from a span's raw offsets
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Segmentation {
    /// Derived ranges in scan order, none containing a line break
    pub offsets: OffsetsList,

    /// `segmented_offsets_map[i]` is the index of the raw range `offsets[i]` came from
    pub segmented_offsets_map: Vec<usize>,
}

impl Segmentation {
    /// Segmentation for text known to be single-line: every raw range maps to itself
    pub fn identity(unsegmented: &[Offsets]) -> Self {
        Self {
            offsets: unsegmented.to_vec(),
            segmented_offsets_map: (0..unsegmented.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Index of the raw range a derived range came from
    pub fn original_index(&self, derived: usize) -> Option<usize> {
        self.segmented_offsets_map.get(derived).copied()
    }

    fn push(&mut self, from: usize, to: usize, original: usize) {
        self.offsets.push(Offsets::new(from, to));
        self.segmented_offsets_map.push(original);
    }
}

/// Split raw ranges into ranges that never contain a line break
///
/// Breaks are excluded from every produced range. A break adjacent to a
/// range boundary or to another break closes nothing, so no zero-length
/// range is emitted for it. A raw range containing no break is returned
/// unchanged, even when it is empty.
pub fn split_multiline_offsets(
    text: &DocumentText,
    unsegmented: &[Offsets],
    config: &SegmentationConfig,
) -> Segmentation {
    let mut segmentation = Segmentation::default();

    for (original, range) in unsegmented.iter().enumerate() {
        let mut open: Option<usize> = Some(range.from);

        // Everything past the end of the text is a non-break
        let scan_end = range.to.min(text.len());
        for pos in range.from..scan_end {
            if text.is_break_at(pos, &config.line_breaks) {
                if let Some(start) = open.take() {
                    if start < pos {
                        segmentation.push(start, pos, original);
                    }
                }
            } else if open.is_none() {
                open = Some(pos);
            }
        }
        if open.is_none() && scan_end < range.to {
            open = Some(scan_end);
        }

        if let Some(start) = open {
            segmentation.push(start, range.to, original);
        }
    }

    log::debug!(
        "split {} raw range(s) into {} line-safe range(s)",
        unsegmented.len(),
        segmentation.len()
    );

    segmentation
}
