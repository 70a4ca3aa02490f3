//! Visual rows
//!
//! Rows are produced by the external row layout. Chunks only need the text
//! baseline to draw themselves.

use serde::{Deserialize, Serialize};

/// One visual line of chunks
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub index: usize,

    /// Vertical coordinate of the text baseline
    #[serde(default)]
    pub text_y: Option<f32>,

    /// Indices of the chunks placed on this row, left to right
    #[serde(default)]
    pub chunks: Vec<usize>,

    #[serde(default)]
    pub sentence: Option<usize>,
}

impl Row {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn with_text_y(mut self, text_y: f32) -> Self {
        self.text_y = Some(text_y);
        self
    }
}
