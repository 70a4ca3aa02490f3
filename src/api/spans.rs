//! Span operations
//!
//! Segmentation and ordering exposed individually, for callers that keep
//! their own span model and only need the offset arithmetic.

use super::helpers::{deserialize, deserialize_or_default, serialize, to_js_error};
use crate::layout::{VisualDocument, VisualizerConfig};
use crate::models::{OffsetsList, SourceData};
use crate::text::{split_multiline_offsets, DocumentText};
use crate::{wasm_info, wasm_log};
use std::cmp::Ordering;
use wasm_bindgen::prelude::*;

/// Split raw offsets at line breaks
///
/// # Parameters
/// - `text`: Full document text
/// - `offsets_js`: Array of `[from, to]` pairs
/// - `config_js`: Optional `VisualizerConfig`
///
/// # Returns
/// `{ offsets, segmentedOffsetsMap }`
#[wasm_bindgen(js_name = splitMultilineOffsets)]
pub fn split_multiline_offsets_js(
    text: &str,
    offsets_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let offsets: OffsetsList = deserialize(offsets_js, "Offsets deserialization error")?;
    let config: VisualizerConfig = deserialize_or_default(config_js, "Config deserialization error")?;

    let segmentation = split_multiline_offsets(&DocumentText::new(text), &offsets, &config.segmentation);
    wasm_log!(
        "splitMultilineOffsets: {} range(s) -> {} line-safe range(s)",
        offsets.len(),
        segmentation.len()
    );

    serialize(&segmentation, "Segmentation serialization error")
}

/// Compare two spans of a document by their head fragments
///
/// # Returns
/// -1, 0 or 1
#[wasm_bindgen(js_name = compareSpans)]
pub fn compare_spans(
    source_js: JsValue,
    a: &str,
    b: &str,
    config_js: JsValue,
) -> Result<i32, JsValue> {
    let source: SourceData = deserialize(source_js, "Source deserialization error")?;
    let config: VisualizerConfig = deserialize_or_default(config_js, "Config deserialization error")?;

    let document = VisualDocument::build(&source, &config)
        .map_err(|e| to_js_error("Document assembly failed", e))?;
    let ordering = document
        .compare(a, b)
        .map_err(|e| to_js_error("compareSpans", e))?;

    wasm_info!("compareSpans({}, {}) = {:?}", a, b, ordering);
    Ok(match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}
