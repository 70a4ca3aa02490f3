//! Visualizer configuration

use crate::models::CHUNK_ID_ATTRIBUTE;
use crate::text::SegmentationConfig;
use serde::{Deserialize, Serialize};

/// Configuration for document assembly and text rendering
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualizerConfig {
    /// Line break characters used to split spans
    pub segmentation: SegmentationConfig,

    /// CSS class of the group chunk text is drawn into
    pub text_class: String,

    /// Attribute carrying the chunk index on every drawn text node
    pub chunk_id_attribute: String,

    /// Drop spans that cover nothing but line breaks instead of failing
    pub skip_empty_spans: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            segmentation: SegmentationConfig::default(),
            text_class: "text".to_string(),
            chunk_id_attribute: CHUNK_ID_ATTRIBUTE.to_string(),
            skip_empty_spans: true,
        }
    }
}
