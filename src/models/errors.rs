//! Error types for span, layout and rendering operations
//!
//! Preconditions that the visualizer used to discover by dereferencing
//! missing state are reported here instead, at the point of use.

use thiserror::Error;

/// Errors from span segmentation, fragment building and ordering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// Segmentation left no line-safe range to build a fragment from
    #[error("span {span_id} has no line-safe offsets to build fragments from")]
    NoFragments { span_id: String },

    /// Lookup table has no span with this id
    #[error("unknown span id: {0}")]
    UnknownSpan(String),
}

/// Errors from drawing chunk text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("chunk {chunk} has no row assigned")]
    MissingRow { chunk: usize },

    #[error("chunk {chunk} refers to row {row}, which does not exist")]
    UnknownRow { chunk: usize, row: usize },

    #[error("chunk {chunk} has no text x position")]
    MissingTextX { chunk: usize },

    #[error("row {row} has no text baseline")]
    MissingTextY { row: usize },

    #[error("unknown text group: {0}")]
    UnknownGroup(usize),
}

/// Errors from assembling a document for display
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Span(#[from] SpanError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("duplicate span id: {0}")]
    DuplicateSpan(String),

    /// Relation or normalization points at a span that was never loaded
    #[error("{context} refers to unknown span {target}")]
    UnknownArgument { context: String, target: String },

    #[error("fragment {span_id}#{ordinal} at {from} lies past the last chunk")]
    FragmentOutsideChunks {
        span_id: String,
        ordinal: usize,
        from: usize,
    },

    #[error("placement refers to unknown chunk {0}")]
    UnknownChunk(usize),

    #[error("chunk {0} is placed more than once")]
    DuplicatePlacement(usize),
}
