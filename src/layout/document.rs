//! Document-level assembly
//!
//! This module contains the main entry point: it takes a source payload and
//! produces chunks, fragmented spans and a span order in one pass. Row
//! placement is supplied afterwards by the external row layout.

use super::assignment::assign_fragments;
use super::chunks::build_chunks;
use super::config::VisualizerConfig;
use crate::models::*;
use crate::renderers::{DrawingSurface, GroupId};
use crate::text::DocumentText;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Where the row layout put one chunk
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChunkPlacement {
    pub chunk: usize,
    pub row: usize,
    pub text_x: f32,
}

/// A document ready for row layout and drawing
#[derive(Debug)]
pub struct VisualDocument {
    text: DocumentText,
    chunks: Vec<Chunk>,
    spans: HashMap<String, Span<Fragmented>>,
    span_order: Vec<String>,
    rows: Vec<Row>,
    skipped_spans: Vec<String>,
}

impl VisualDocument {
    /// Assemble a document from its source payload
    ///
    /// Spans are segmented at line breaks and fragmented, relations and
    /// normalizations are attached, fragments are assigned to chunks and the
    /// spans are sorted left to right.
    pub fn build(source: &SourceData, config: &VisualizerConfig) -> Result<Self, LayoutError> {
        let text = DocumentText::new(source.text.as_str());
        let mut chunks = build_chunks(&text, &source.token_offsets);

        let mut spans = HashMap::with_capacity(source.entities.len());
        let mut seen = HashSet::with_capacity(source.entities.len());
        let mut skipped_spans = Vec::new();

        for entity in &source.entities {
            if !seen.insert(entity.id.as_str()) {
                return Err(LayoutError::DuplicateSpan(entity.id.clone()));
            }

            let segmented = Span::new(
                entity.id.as_str(),
                entity.entity_type.as_str(),
                entity.offsets.clone(),
                entity.general_type.as_str(),
            )
            .split_multiline_offsets_with(&text, &config.segmentation);

            let mut span = match segmented.build_fragments() {
                Ok(span) => span,
                Err(SpanError::NoFragments { span_id }) if config.skip_empty_spans => {
                    log::warn!("span {} covers only line breaks, skipping", span_id);
                    skipped_spans.push(span_id);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            span.annotations.attributes = entity.attributes.clone();
            span.hints.color = entity.color.clone();
            span.hints.label_text = entity.label_text.clone();
            span.hints.hidden = entity.hidden;
            spans.insert(entity.id.clone(), span);
        }

        attach_relations(&mut spans, &skipped_spans, &source.relations)?;
        attach_normalizations(&mut spans, &skipped_spans, &source.normalizations)?;

        let mut span_order: Vec<String> = spans.keys().cloned().collect();
        Span::sort_span_ids(&spans, &mut span_order)?;
        assign_fragments(&mut chunks, &mut spans, &span_order)?;

        log::debug!(
            "assembled document: {} chunk(s), {} span(s), {} skipped",
            chunks.len(),
            spans.len(),
            skipped_spans.len()
        );

        Ok(Self {
            text,
            chunks,
            spans,
            span_order,
            rows: Vec::new(),
            skipped_spans,
        })
    }

    pub fn text(&self) -> &DocumentText {
        &self.text
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn spans(&self) -> &HashMap<String, Span<Fragmented>> {
        &self.spans
    }

    pub fn span(&self, id: &str) -> Option<&Span<Fragmented>> {
        self.spans.get(id)
    }

    /// Span ids, left to right
    pub fn span_order(&self) -> &[String] {
        &self.span_order
    }

    /// Ids of spans dropped because they covered only line breaks
    pub fn skipped_spans(&self) -> &[String] {
        &self.skipped_spans
    }

    pub fn compare(&self, a: &str, b: &str) -> Result<Ordering, SpanError> {
        Span::compare(&self.spans, a, b)
    }

    /// Take over rows and chunk positions from the row layout
    ///
    /// Every placement is checked before anything is changed; a chunk may be
    /// placed at most once. Each row's chunk list is rebuilt from the
    /// placements in chunk order.
    pub fn apply_placements(
        &mut self,
        rows: Vec<Row>,
        placements: &[ChunkPlacement],
    ) -> Result<(), LayoutError> {
        let mut placed = HashSet::with_capacity(placements.len());
        for placement in placements {
            if placement.chunk >= self.chunks.len() {
                return Err(LayoutError::UnknownChunk(placement.chunk));
            }
            if !placed.insert(placement.chunk) {
                return Err(LayoutError::DuplicatePlacement(placement.chunk));
            }
            if !rows.iter().any(|row| row.index == placement.row) {
                return Err(RenderError::UnknownRow {
                    chunk: placement.chunk,
                    row: placement.row,
                }
                .into());
            }
        }

        self.rows = rows;
        for row in &mut self.rows {
            row.chunks.clear();
        }

        let mut ordered: Vec<&ChunkPlacement> = placements.iter().collect();
        ordered.sort_by_key(|placement| placement.chunk);

        for placement in ordered {
            let chunk = &mut self.chunks[placement.chunk];
            chunk.row = Some(placement.row);
            chunk.text_x = Some(placement.text_x);
            if let Some(row) = self.rows.iter_mut().find(|row| row.index == placement.row) {
                row.chunks.push(placement.chunk);
            }
        }

        Ok(())
    }

    /// Draw the text of every placed chunk, row by row, into a new group
    /// of class `config.text_class`
    pub fn render_text<D: DrawingSurface>(
        &self,
        surface: &mut D,
        config: &VisualizerConfig,
    ) -> Result<GroupId, RenderError> {
        let group = surface.create_group(&config.text_class);
        for row in &self.rows {
            for &chunk_index in &row.chunks {
                if let Some(chunk) = self.chunks.get(chunk_index) {
                    chunk.render_text(&self.rows, surface, group, &config.chunk_id_attribute)?;
                }
            }
        }
        Ok(group)
    }
}

/// Add each relation to its origin's outgoing and its target's incoming arcs
fn attach_relations(
    spans: &mut HashMap<String, Span<Fragmented>>,
    skipped: &[String],
    relations: &[RelationPayload],
) -> Result<(), LayoutError> {
    for relation in relations {
        let [origin, target, ..] = relation.arguments.as_slice() else {
            log::warn!("relation {} has fewer than two arguments, skipping", relation.id);
            continue;
        };

        if skipped.contains(&origin.target) || skipped.contains(&target.target) {
            log::warn!("relation {} touches a skipped span, skipping", relation.id);
            continue;
        }
        for argument in [origin, target] {
            if !spans.contains_key(&argument.target) {
                return Err(LayoutError::UnknownArgument {
                    context: format!("relation {}", relation.id),
                    target: argument.target.clone(),
                });
            }
        }

        let arc = RelationArc::new(
            relation.id.as_str(),
            relation.relation_type.as_str(),
            origin.target.as_str(),
            target.target.as_str(),
        )
        .with_role(target.label.as_str());

        if let Some(span) = spans.get_mut(&origin.target) {
            span.annotations.outgoing.push(arc.clone());
        }
        if let Some(span) = spans.get_mut(&target.target) {
            span.annotations.incoming.push(arc);
        }
    }

    Ok(())
}

fn attach_normalizations(
    spans: &mut HashMap<String, Span<Fragmented>>,
    skipped: &[String],
    normalizations: &[Normalization],
) -> Result<(), LayoutError> {
    for normalization in normalizations {
        match spans.get_mut(&normalization.target) {
            Some(span) => span.annotations.normalizations.push(normalization.clone()),
            None if skipped.contains(&normalization.target) => {}
            None => {
                return Err(LayoutError::UnknownArgument {
                    context: "normalization".to_string(),
                    target: normalization.target.clone(),
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::SvgSurface;

    fn source() -> SourceData {
        serde_json::from_str(
            r##"{
                "text": "Alice met\nBob today",
                "tokenOffsets": [[0,5],[6,9],[10,13],[14,19]],
                "entities": [
                    {"id": "T2", "type": "Person", "offsets": [[10,13]]},
                    {"id": "T1", "type": "Person", "offsets": [[0,5]], "color": "#fc0"},
                    {"id": "T3", "type": "Event", "offsets": [[6,13]]}
                ],
                "relations": [
                    {"id": "R1", "type": "agent", "arguments": [["Arg1","T3"],["Arg2","T1"]]}
                ],
                "normalizations": [
                    {"target": "T2", "refDb": "wiki", "refId": "Q1"}
                ]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_build_orders_spans_left_to_right() {
        let doc = VisualDocument::build(&source(), &VisualizerConfig::default()).unwrap();

        // T3 is split at the line break; its head fragment is [10,13] like T2's
        assert_eq!(doc.span_order(), &["T1", "T2", "T3"]);
        assert_eq!(doc.span("T3").unwrap().fragments().len(), 2);
        assert_eq!(doc.compare("T1", "T2"), Ok(Ordering::Less));
        assert_eq!(doc.span("T1").unwrap().hints.color.as_deref(), Some("#fc0"));
    }

    #[test]
    fn test_relations_and_normalizations_attached() {
        let doc = VisualDocument::build(&source(), &VisualizerConfig::default()).unwrap();

        let t3 = doc.span("T3").unwrap();
        let t1 = doc.span("T1").unwrap();
        assert_eq!(t3.annotations.outgoing[0].target, "T1");
        assert_eq!(t1.annotations.incoming[0].origin, "T3");
        assert_eq!(t1.annotations.incoming[0].role.as_deref(), Some("Arg2"));
        assert_eq!(doc.span("T2").unwrap().annotations.normalizations.len(), 1);
    }

    #[test]
    fn test_duplicate_span_rejected() {
        let mut data = source();
        data.entities.push(data.entities[0].clone());
        let result = VisualDocument::build(&data, &VisualizerConfig::default());
        assert!(matches!(result, Err(LayoutError::DuplicateSpan(id)) if id == "T2"));
    }

    #[test]
    fn test_span_on_line_break_skipped_or_rejected() {
        let mut data = source();
        data.entities.push(EntityPayload {
            id: "T9".to_string(),
            entity_type: "Person".to_string(),
            offsets: vec![Offsets::new(9, 10)],
            general_type: "entity".to_string(),
            attributes: Default::default(),
            color: None,
            label_text: None,
            hidden: false,
        });

        let doc = VisualDocument::build(&data, &VisualizerConfig::default()).unwrap();
        assert_eq!(doc.skipped_spans(), &["T9"]);
        assert!(doc.span("T9").is_none());

        let strict = VisualizerConfig {
            skip_empty_spans: false,
            ..VisualizerConfig::default()
        };
        assert!(matches!(
            VisualDocument::build(&data, &strict),
            Err(LayoutError::Span(SpanError::NoFragments { .. }))
        ));
    }

    #[test]
    fn test_relation_to_unknown_span() {
        let mut data = source();
        data.relations[0].arguments[1].target = "T42".to_string();
        let result = VisualDocument::build(&data, &VisualizerConfig::default());
        assert!(matches!(
            result,
            Err(LayoutError::UnknownArgument { target, .. }) if target == "T42"
        ));
    }

    #[test]
    fn test_render_placed_chunks() {
        let mut doc = VisualDocument::build(&source(), &VisualizerConfig::default()).unwrap();
        let rows = vec![Row::new(0).with_text_y(20.0), Row::new(1).with_text_y(45.0)];
        let placements = [
            ChunkPlacement { chunk: 1, row: 0, text_x: 50.0 },
            ChunkPlacement { chunk: 0, row: 0, text_x: 0.0 },
            ChunkPlacement { chunk: 2, row: 1, text_x: 0.0 },
        ];
        doc.apply_placements(rows, &placements).unwrap();
        assert_eq!(doc.rows()[0].chunks, vec![0, 1]);

        let mut surface = SvgSurface::new();
        let group = doc.render_text(&mut surface, &VisualizerConfig::default()).unwrap();
        let texts: Vec<_> = surface.group(group).unwrap().nodes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["Alice", "met", "Bob"]);
    }

    #[test]
    fn test_render_uses_configured_attribute() {
        let config = VisualizerConfig {
            text_class: "row-text".to_string(),
            chunk_id_attribute: "data-token".to_string(),
            ..VisualizerConfig::default()
        };
        let mut doc = VisualDocument::build(&source(), &config).unwrap();
        doc.apply_placements(
            vec![Row::new(0).with_text_y(1.0)],
            &[ChunkPlacement { chunk: 0, row: 0, text_x: 0.0 }],
        )
        .unwrap();

        let mut surface = SvgSurface::new();
        doc.render_text(&mut surface, &config).unwrap();
        assert_eq!(
            surface.to_markup(),
            r#"<g class="row-text"><text x="0" y="1" data-token="0">Alice</text></g>"#
        );
    }

    #[test]
    fn test_chunk_placed_twice_rejected() {
        let mut doc = VisualDocument::build(&source(), &VisualizerConfig::default()).unwrap();
        let rows = vec![Row::new(0).with_text_y(1.0), Row::new(1).with_text_y(2.0)];
        let result = doc.apply_placements(
            rows,
            &[
                ChunkPlacement { chunk: 0, row: 0, text_x: 0.0 },
                ChunkPlacement { chunk: 0, row: 1, text_x: 5.0 },
            ],
        );
        assert_eq!(result, Err(LayoutError::DuplicatePlacement(0)));
        assert!(doc.rows().is_empty());
        assert!(doc.chunks().iter().all(|c| c.row.is_none() && c.text_x.is_none()));

        let mut surface = SvgSurface::new();
        doc.render_text(&mut surface, &VisualizerConfig::default()).unwrap();
        assert_eq!(surface.node_count(), 0);
    }

    #[test]
    fn test_placement_validation() {
        let mut doc = VisualDocument::build(&source(), &VisualizerConfig::default()).unwrap();
        let result = doc.apply_placements(
            vec![Row::new(0).with_text_y(20.0)],
            &[ChunkPlacement { chunk: 9, row: 0, text_x: 0.0 }],
        );
        assert_eq!(result, Err(LayoutError::UnknownChunk(9)));

        let result = doc.apply_placements(
            vec![Row::new(0).with_text_y(20.0)],
            &[ChunkPlacement { chunk: 0, row: 3, text_x: 0.0 }],
        );
        assert_eq!(
            result,
            Err(LayoutError::Render(RenderError::UnknownRow { chunk: 0, row: 3 }))
        );
        assert!(doc.chunks().iter().all(|c| c.row.is_none()));
    }
}
