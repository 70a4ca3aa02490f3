//! Display List for Layout Rendering
//!
//! This module defines the output structure returned to JavaScript: every
//! span field the layout, arc-routing and hit-testing stages read, plus the
//! chunks with their layout slots.

use super::document::VisualDocument;
use crate::models::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Top-level display list
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    /// Spans, left to right
    pub spans: Vec<SpanView>,

    pub chunks: Vec<Chunk>,

    pub rows: Vec<Row>,

    /// Spans left out because they covered only line breaks
    pub skipped_spans: Vec<String>,
}

/// Serialisable snapshot of a fragmented span
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SpanView {
    pub id: String,

    #[serde(rename = "type")]
    pub span_type: String,

    pub general_type: String,

    pub unsegmented_offsets: OffsetsList,

    /// Line-safe offsets, in scan order
    pub offsets: OffsetsList,

    pub segmented_offsets_map: Vec<usize>,

    /// Ascending by midpoint
    pub fragments: Vec<Fragment>,

    pub whole_from: usize,

    pub whole_to: usize,

    /// Ordinal of the head fragment
    pub head_fragment: usize,

    pub incoming: Vec<RelationArc>,

    pub outgoing: Vec<RelationArc>,

    pub attributes: BTreeMap<String, String>,

    pub normalizations: Vec<Normalization>,

    pub hints: RenderHints,
}

impl From<&Span<Fragmented>> for SpanView {
    fn from(span: &Span<Fragmented>) -> Self {
        Self {
            id: span.id().to_string(),
            span_type: span.span_type().to_string(),
            general_type: span.general_type().to_string(),
            unsegmented_offsets: span.unsegmented_offsets().to_vec(),
            offsets: span.offsets().to_vec(),
            segmented_offsets_map: span.segmented_offsets_map().to_vec(),
            fragments: span.fragments().to_vec(),
            whole_from: span.whole_from(),
            whole_to: span.whole_to(),
            head_fragment: span.head_fragment().ordinal,
            incoming: span.annotations.incoming.clone(),
            outgoing: span.annotations.outgoing.clone(),
            attributes: span.annotations.attributes.clone(),
            normalizations: span.annotations.normalizations.clone(),
            hints: span.hints.clone(),
        }
    }
}

impl From<&VisualDocument> for DisplayList {
    fn from(document: &VisualDocument) -> Self {
        let spans = document
            .span_order()
            .iter()
            .filter_map(|id| document.span(id))
            .map(SpanView::from)
            .collect();

        Self {
            spans,
            chunks: document.chunks().to_vec(),
            rows: document.rows().to_vec(),
            skipped_spans: document.skipped_spans().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::VisualizerConfig;

    #[test]
    fn test_display_list_json_shape() {
        let source: SourceData = serde_json::from_str(
            r#"{
                "text": "ab\ncd ef",
                "tokenOffsets": [[0,2],[3,5],[6,8]],
                "entities": [{"id": "T1", "type": "Org", "offsets": [[0,5]]}]
            }"#,
        )
        .unwrap();
        let doc = VisualDocument::build(&source, &VisualizerConfig::default()).unwrap();
        let json = serde_json::to_value(DisplayList::from(&doc)).unwrap();

        let span = &json["spans"][0];
        assert_eq!(span["type"], "Org");
        assert_eq!(span["offsets"], serde_json::json!([[0, 2], [3, 5]]));
        assert_eq!(span["segmentedOffsetsMap"], serde_json::json!([0, 0]));
        assert_eq!(span["wholeFrom"], 0);
        assert_eq!(span["wholeTo"], 5);
        assert_eq!(span["headFragment"], 1);
        assert_eq!(span["fragments"][1]["chunk"], 1);
        assert_eq!(json["chunks"][1]["space"], "\n");
        assert_eq!(json["chunks"][0]["fragments"][0]["spanId"], "T1");
    }
}
