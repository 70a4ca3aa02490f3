//! Spans: one annotation each
//!
//! A span starts out knowing only its raw offsets, which may cross line
//! breaks. Deriving anything renderable needs the full document text, which
//! is usually not available when annotation payloads are parsed, so the
//! lifecycle is split into explicit states:
//!
//! - [`Raw`]: raw offsets only
//! - [`Segmented`]: line-safe offsets and the map back to raw offsets
//! - [`Fragmented`]: fragments sorted by midpoint, bounds and head fragment
//!
//! Operations are only defined on the state that can answer them, so a
//! fragment cannot be read before it has been built.

use super::annotations::{Normalization, RenderHints, SpanAnnotations};
use super::errors::SpanError;
use super::fragment::Fragment;
use super::offsets::{Offsets, OffsetsList};
use crate::text::{split_multiline_offsets, DocumentText, Segmentation, SegmentationConfig};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::rc::Rc;

mod private {
    pub trait Sealed {}
}

/// Lifecycle state of a [`Span`]
pub trait SpanState: private::Sealed + Clone + Debug {
    /// Derived state for a copy of the span under `span_id`
    fn copy_for(&self, span_id: &str) -> Self;
}

/// Only raw offsets are known
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Raw;

/// Line-safe offsets are known
#[derive(Clone, Debug)]
pub struct Segmented {
    segmentation: Rc<Segmentation>,
}

/// Fragments, bounds and head fragment are known
#[derive(Clone, Debug)]
pub struct Fragmented {
    segmentation: Rc<Segmentation>,
    /// Never empty, ascending by midpoint
    fragments: Vec<Fragment>,
    whole_from: usize,
    whole_to: usize,
}

impl private::Sealed for Raw {}
impl private::Sealed for Segmented {}
impl private::Sealed for Fragmented {}

impl SpanState for Raw {
    fn copy_for(&self, _span_id: &str) -> Self {
        Raw
    }
}

impl SpanState for Segmented {
    fn copy_for(&self, _span_id: &str) -> Self {
        // Derived offsets are read-only once computed; copies alias them
        Self {
            segmentation: Rc::clone(&self.segmentation),
        }
    }
}

impl SpanState for Fragmented {
    fn copy_for(&self, span_id: &str) -> Self {
        let fragments = self
            .fragments
            .iter()
            .map(|fragment| Fragment {
                span_id: span_id.to_string(),
                ..fragment.clone()
            })
            .collect();

        Self {
            segmentation: Rc::clone(&self.segmentation),
            fragments,
            whole_from: self.whole_from,
            whole_to: self.whole_to,
        }
    }
}

/// One annotation over the document text
#[derive(Clone, Debug)]
pub struct Span<S: SpanState = Raw> {
    id: String,
    span_type: String,
    general_type: String,
    unsegmented_offsets: OffsetsList,

    /// Arcs, attributes and normalizations, filled in by collaborators
    pub annotations: SpanAnnotations,

    /// Visibility and styling hints
    pub hints: RenderHints,

    state: S,
}

impl<S: SpanState> Span<S> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn span_type(&self) -> &str {
        &self.span_type
    }

    pub fn general_type(&self) -> &str {
        &self.general_type
    }

    /// Offsets as supplied, possibly crossing line breaks
    pub fn unsegmented_offsets(&self) -> &[Offsets] {
        &self.unsegmented_offsets
    }

    /// Reset every annotation container to empty
    pub fn init_containers(&mut self) {
        self.annotations = SpanAnnotations::new();
    }

    /// Drop all derived state and annotation containers, keeping identity
    ///
    /// Fragments or arcs handed out from the old state are stale afterwards.
    pub fn reset(self) -> Span<Raw> {
        let mut span = self.with_state(Raw);
        span.init_containers();
        span
    }

    /// Editable candidate of this span under a new id
    ///
    /// Type, attributes and hints are duplicated and the raw offsets are
    /// copied into a new list. Line-safe offsets and the segment map are
    /// shared with this span, not duplicated. Arcs stay with the original.
    pub fn copy(&self, new_id: impl Into<String>) -> Span<S> {
        let id = new_id.into();
        let normalizations = self
            .annotations
            .normalizations
            .iter()
            .map(|normalization| Normalization {
                target: id.clone(),
                ..normalization.clone()
            })
            .collect();
        let annotations = SpanAnnotations {
            attributes: self.annotations.attributes.clone(),
            attribute_text: self.annotations.attribute_text.clone(),
            attribute_cues: self.annotations.attribute_cues.clone(),
            attribute_cue_for: self.annotations.attribute_cue_for.clone(),
            attribute_merge: self.annotations.attribute_merge.clone(),
            normalizations,
            ..SpanAnnotations::new()
        };

        Span {
            state: self.state.copy_for(&id),
            id,
            span_type: self.span_type.clone(),
            general_type: self.general_type.clone(),
            unsegmented_offsets: self.unsegmented_offsets.clone(),
            annotations,
            hints: self.hints.clone(),
        }
    }

    fn with_state<T: SpanState>(self, state: T) -> Span<T> {
        Span {
            id: self.id,
            span_type: self.span_type,
            general_type: self.general_type,
            unsegmented_offsets: self.unsegmented_offsets,
            annotations: self.annotations,
            hints: self.hints,
            state,
        }
    }
}

impl Span<Raw> {
    pub fn new(
        id: impl Into<String>,
        span_type: impl Into<String>,
        offsets: OffsetsList,
        general_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            span_type: span_type.into(),
            general_type: general_type.into(),
            unsegmented_offsets: offsets,
            annotations: SpanAnnotations::new(),
            hints: RenderHints::default(),
            state: Raw,
        }
    }

    /// Split the raw offsets at line feeds and carriage returns
    pub fn split_multiline_offsets(self, text: &DocumentText) -> Span<Segmented> {
        self.split_multiline_offsets_with(text, &SegmentationConfig::default())
    }

    pub fn split_multiline_offsets_with(
        self,
        text: &DocumentText,
        config: &SegmentationConfig,
    ) -> Span<Segmented> {
        let segmentation = split_multiline_offsets(text, &self.unsegmented_offsets, config);
        self.with_segmentation(segmentation)
    }

    /// Use the raw offsets as line-safe offsets
    ///
    /// Only valid when the document is known to contain no line breaks.
    pub fn with_line_safe_offsets(self) -> Span<Segmented> {
        let segmentation = Segmentation::identity(&self.unsegmented_offsets);
        self.with_segmentation(segmentation)
    }

    fn with_segmentation(self, segmentation: Segmentation) -> Span<Segmented> {
        self.with_state(Segmented {
            segmentation: Rc::new(segmentation),
        })
    }
}

impl Span<Segmented> {
    /// Line-safe offsets, in scan order
    pub fn offsets(&self) -> &[Offsets] {
        &self.state.segmentation.offsets
    }

    pub fn segmented_offsets_map(&self) -> &[usize] {
        &self.state.segmentation.segmented_offsets_map
    }

    pub fn segmentation(&self) -> &Rc<Segmentation> {
        &self.state.segmentation
    }

    /// Build one fragment per line-safe range and sort them by midpoint
    ///
    /// The sort is stable, so fragments with equal midpoints keep their
    /// offset order. Fails when segmentation left no range at all.
    pub fn build_fragments(self) -> Result<Span<Fragmented>, SpanError> {
        let mut fragments: Vec<Fragment> = self
            .offsets()
            .iter()
            .enumerate()
            .map(|(ordinal, offsets)| Fragment::new(ordinal, self.id.clone(), offsets.from, offsets.to))
            .collect();

        fragments.sort_by(Fragment::midpoint_comparator);

        let whole_from = fragments.iter().map(|f| f.from).min();
        let whole_to = fragments.iter().map(|f| f.to).max();
        let (Some(whole_from), Some(whole_to)) = (whole_from, whole_to) else {
            return Err(SpanError::NoFragments { span_id: self.id });
        };

        let segmentation = Rc::clone(&self.state.segmentation);
        Ok(self.with_state(Fragmented {
            segmentation,
            fragments,
            whole_from,
            whole_to,
        }))
    }
}

impl Span<Fragmented> {
    /// Line-safe offsets, in scan order
    pub fn offsets(&self) -> &[Offsets] {
        &self.state.segmentation.offsets
    }

    pub fn segmented_offsets_map(&self) -> &[usize] {
        &self.state.segmentation.segmented_offsets_map
    }

    pub fn segmentation(&self) -> &Rc<Segmentation> {
        &self.state.segmentation
    }

    /// Fragments ascending by midpoint
    pub fn fragments(&self) -> &[Fragment] {
        &self.state.fragments
    }

    /// Layout access to fragment slots; order and count are fixed
    pub fn fragments_mut(&mut self) -> &mut [Fragment] {
        &mut self.state.fragments
    }

    pub fn fragment(&self, ordinal: usize) -> Option<&Fragment> {
        self.state.fragments.iter().find(|f| f.ordinal == ordinal)
    }

    /// Rightmost fragment by midpoint; arcs attach here
    pub fn head_fragment(&self) -> &Fragment {
        // non-empty by construction
        &self.state.fragments[self.state.fragments.len() - 1]
    }

    pub fn whole_from(&self) -> usize {
        self.state.whole_from
    }

    pub fn whole_to(&self) -> usize {
        self.state.whole_to
    }

    /// `(from, to)` of every fragment, in fragment order
    pub fn fragment_offsets(&self) -> OffsetsList {
        self.state.fragments.iter().map(Fragment::offsets).collect()
    }

    /// Sort key: head midpoint, then head start, then id
    pub fn ordering_key(&self) -> (u128, usize, &str) {
        let head = self.head_fragment();
        (head.midpoint_sum(), head.from, &self.id)
    }

    /// Left-to-right order of two spans looked up by id
    pub fn compare(
        spans: &HashMap<String, Span<Fragmented>>,
        a: &str,
        b: &str,
    ) -> Result<Ordering, SpanError> {
        let a_span = lookup(spans, a)?;
        let b_span = lookup(spans, b)?;
        Ok(a_span.ordering_key().cmp(&b_span.ordering_key()))
    }

    /// Sort span ids left to right, failing before sorting if any id is unknown
    pub fn sort_span_ids(
        spans: &HashMap<String, Span<Fragmented>>,
        ids: &mut [String],
    ) -> Result<(), SpanError> {
        for id in ids.iter() {
            lookup(spans, id)?;
        }
        ids.sort_by(|a, b| spans[a.as_str()].ordering_key().cmp(&spans[b.as_str()].ordering_key()));
        Ok(())
    }
}

fn lookup<'a>(
    spans: &'a HashMap<String, Span<Fragmented>>,
    id: &str,
) -> Result<&'a Span<Fragmented>, SpanError> {
    spans
        .get(id)
        .ok_or_else(|| SpanError::UnknownSpan(id.to_string()))
}
