//! Fragments: line-safe rendering units owned by a span

use super::offsets::Offsets;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One contiguous, single-line piece of a span
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    /// Position of the source range in the span's line-safe offsets
    pub ordinal: usize,

    /// Id of the owning span
    pub span_id: String,

    pub from: usize,
    pub to: usize,

    /// Index of the chunk this fragment is drawn in (set by layout)
    #[serde(default)]
    pub chunk: Option<usize>,
}

impl Fragment {
    pub fn new(ordinal: usize, span_id: impl Into<String>, from: usize, to: usize) -> Self {
        Self {
            ordinal,
            span_id: span_id.into(),
            from,
            to,
            chunk: None,
        }
    }

    pub fn offsets(&self) -> Offsets {
        Offsets::new(self.from, self.to)
    }

    pub fn midpoint_sum(&self) -> u128 {
        self.from as u128 + self.to as u128
    }

    /// Orders fragments by midpoint, ascending
    pub fn midpoint_comparator(a: &Fragment, b: &Fragment) -> Ordering {
        a.midpoint_sum().cmp(&b.midpoint_sum())
    }

    /// Non-owning handle used by chunks
    pub fn reference(&self) -> FragmentRef {
        FragmentRef {
            span_id: self.span_id.clone(),
            ordinal: self.ordinal,
        }
    }
}

/// Handle to a fragment owned by some span
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FragmentRef {
    pub span_id: String,
    pub ordinal: usize,
}
