//! Offset ranges over document text
//!
//! Offsets are UTF-16 code-unit indices, `to` exclusive. On the wire a range
//! is the two-element array `[from, to]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous `[from, to)` range of document text
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Offsets {
    pub from: usize,
    pub to: usize,
}

/// Ordered ranges forming one annotation; may be discontiguous
pub type OffsetsList = Vec<Offsets>;

impl Offsets {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }

    /// Twice the midpoint, kept integral so comparisons stay exact and
    /// widened so it cannot overflow
    pub fn midpoint_sum(&self) -> u128 {
        self.from as u128 + self.to as u128
    }

    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.from && pos < self.to
    }
}

impl From<(usize, usize)> for Offsets {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

impl From<Offsets> for (usize, usize) {
    fn from(offsets: Offsets) -> Self {
        (offsets.from, offsets.to)
    }
}

impl fmt::Display for Offsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.from, self.to)
    }
}
