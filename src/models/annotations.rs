//! Annotation metadata carried by a span
//!
//! None of this affects segmentation or fragment order. It is filled in from
//! the source payload and read back by layout and hit-testing.

use super::arc::RelationArc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Link from a span to an entry in an external knowledge base
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Normalization {
    /// Span the normalization is attached to
    pub target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_db: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,

    /// Display text; when set, no lookup is needed to show the normalization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_text: Option<String>,
}

/// Collection-valued annotation state of a span
///
/// Resetting a span for re-segmentation replaces this with the empty default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SpanAnnotations {
    /// Arcs ending at this span
    pub incoming: Vec<RelationArc>,

    /// Arcs starting at this span
    pub outgoing: Vec<RelationArc>,

    pub attributes: BTreeMap<String, String>,

    /// Rendered attribute labels, in display order
    pub attribute_text: Vec<String>,

    pub attribute_cues: BTreeMap<String, String>,

    pub attribute_cue_for: BTreeMap<String, String>,

    /// Span-global rendering attributes (box, cross, ...)
    pub attribute_merge: BTreeMap<String, serde_json::Value>,

    pub normalizations: Vec<Normalization>,
}

impl SpanAnnotations {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Visibility and styling hints, consumed by the drawing stage
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderHints {
    pub hidden: bool,

    /// Span starts before the visible part of the document
    pub clipped_at_start: bool,

    /// Span ends after the visible part of the document
    pub clipped_at_end: bool,

    pub color: Option<String>,

    pub label_text: Option<String>,

    /// Vertical stacking level assigned by layout
    pub floor: Option<i32>,

    pub draw_curly: bool,
}
