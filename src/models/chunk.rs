//! Chunks: token-level slices of document text
//!
//! A chunk's identity (index, text, offsets, preceding whitespace) is fixed
//! at construction and only readable afterwards. Layout slots are filled in
//! by later passes.

use super::errors::RenderError;
use super::fragment::FragmentRef;
use super::row::Row;
use crate::renderers::{DrawingSurface, GroupId, TextNode};
use serde::Serialize;

/// Default attribute tagging rendered text with its chunk index for hit-testing
pub const CHUNK_ID_ATTRIBUTE: &str = "data-chunk-id";

/// Text generated from token offsets, representing one or more tokens
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    index: usize,
    text: String,
    from: usize,
    to: usize,
    space: String,

    /// Fragments drawn in this chunk; owned by their spans
    pub fragments: Vec<FragmentRef>,

    /// Index of the row this chunk is placed on
    pub row: Option<usize>,

    /// Horizontal text position
    pub text_x: Option<f32>,

    pub sentence: Option<usize>,
}

impl Chunk {
    pub fn new(
        index: usize,
        text: impl Into<String>,
        from: usize,
        to: usize,
        space: impl Into<String>,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            from,
            to,
            space: space.into(),
            fragments: Vec::new(),
            row: None,
            text_x: None,
            sentence: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    /// Whitespace immediately preceding this chunk
    pub fn space(&self) -> &str {
        &self.space
    }

    /// Length of the preceding whitespace in code units
    pub fn space_len(&self) -> usize {
        self.space.encode_utf16().count()
    }

    /// Check that this chunk starts exactly where `previous` and our space end
    pub fn follows(&self, previous: &Chunk) -> bool {
        self.from == previous.to + self.space_len()
    }

    /// Draw this chunk's text at its layout position, tagged with
    /// `id_attribute` set to the chunk index
    ///
    /// Fails without drawing anything when the row or horizontal position has
    /// not been assigned yet.
    pub fn render_text<D: DrawingSurface>(
        &self,
        rows: &[Row],
        surface: &mut D,
        group: GroupId,
        id_attribute: &str,
    ) -> Result<(), RenderError> {
        let row_index = self.row.ok_or(RenderError::MissingRow { chunk: self.index })?;
        let row = rows
            .iter()
            .find(|row| row.index == row_index)
            .ok_or(RenderError::UnknownRow {
                chunk: self.index,
                row: row_index,
            })?;
        let x = self.text_x.ok_or(RenderError::MissingTextX { chunk: self.index })?;
        let y = row.text_y.ok_or(RenderError::MissingTextY { row: row.index })?;

        surface.add_text(
            group,
            TextNode {
                text: self.text.clone(),
                x,
                y,
                attributes: vec![(id_attribute.to_string(), self.index.to_string())],
            },
        )
    }
}
