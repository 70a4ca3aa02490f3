//! Document assembly and text rendering
//!
//! `buildDisplayList` hands JavaScript everything row layout needs;
//! `renderChunkText` takes the row layout's placements back and draws the
//! chunk text.

use super::helpers::{deserialize, deserialize_or_default, serialize, to_js_error};
use crate::layout::{ChunkPlacement, DisplayList, VisualDocument, VisualizerConfig};
use crate::models::{Row, SourceData};
use crate::renderers::SvgSurface;
use crate::{wasm_info, wasm_warn};
use wasm_bindgen::prelude::*;

fn assemble(source_js: JsValue, config: &VisualizerConfig) -> Result<VisualDocument, JsValue> {
    let source: SourceData = deserialize(source_js, "Source deserialization error")?;
    let document = VisualDocument::build(&source, config)
        .map_err(|e| to_js_error("Document assembly failed", e))?;

    if !document.skipped_spans().is_empty() {
        wasm_warn!(
            "Skipped {} span(s) covering only line breaks: {:?}",
            document.skipped_spans().len(),
            document.skipped_spans()
        );
    }
    Ok(document)
}

/// Build the display list for a document
///
/// # Parameters
/// - `source_js`: `SourceData` (text, tokenOffsets, entities, relations, normalizations)
/// - `config_js`: Optional `VisualizerConfig`
///
/// # Returns
/// `DisplayList` with spans in left-to-right order and chunks
#[wasm_bindgen(js_name = buildDisplayList)]
pub fn build_display_list(source_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: VisualizerConfig = deserialize_or_default(config_js, "Config deserialization error")?;
    let document = assemble(source_js, &config)?;

    let display_list = DisplayList::from(&document);
    wasm_info!(
        "buildDisplayList: {} span(s), {} chunk(s)",
        display_list.spans.len(),
        display_list.chunks.len()
    );

    serialize(&display_list, "Display list serialization error")
}

/// Draw chunk text at the positions chosen by row layout
///
/// # Parameters
/// - `source_js`: `SourceData`
/// - `rows_js`: Array of `{ index, textY }`
/// - `placements_js`: Array of `{ chunk, row, textX }`
/// - `config_js`: Optional `VisualizerConfig`
///
/// # Returns
/// SVG markup of the text group
#[wasm_bindgen(js_name = renderChunkText)]
pub fn render_chunk_text(
    source_js: JsValue,
    rows_js: JsValue,
    placements_js: JsValue,
    config_js: JsValue,
) -> Result<String, JsValue> {
    let config: VisualizerConfig = deserialize_or_default(config_js, "Config deserialization error")?;
    let rows: Vec<Row> = deserialize(rows_js, "Rows deserialization error")?;
    let placements: Vec<ChunkPlacement> = deserialize(placements_js, "Placements deserialization error")?;

    let mut document = assemble(source_js, &config)?;
    document
        .apply_placements(rows, &placements)
        .map_err(|e| to_js_error("Invalid placements", e))?;

    let mut surface = SvgSurface::new();
    document
        .render_text(&mut surface, &config)
        .map_err(|e| to_js_error("Text rendering failed", e))?;

    wasm_info!("renderChunkText: drew {} chunk(s)", surface.node_count());
    Ok(surface.to_markup())
}
