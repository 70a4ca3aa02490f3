//! Models module for the annotation visualizer
//!
//! This module contains the data model shared by segmentation, layout and
//! rendering: offsets, spans and their fragments, chunks, rows and arcs.

pub mod offsets;
pub mod fragment;
pub mod span;
pub mod chunk;
pub mod row;
pub mod arc;
pub mod annotations;
pub mod source_data;
pub mod errors;

// Re-export commonly used types
pub use offsets::{Offsets, OffsetsList};
pub use fragment::{Fragment, FragmentRef};
pub use span::{Fragmented, Raw, Segmented, Span, SpanState};
pub use chunk::{Chunk, CHUNK_ID_ATTRIBUTE};
pub use row::Row;
pub use arc::RelationArc;
pub use annotations::{Normalization, RenderHints, SpanAnnotations};
pub use source_data::{Argument, EntityPayload, RelationPayload, SourceData};
pub use errors::{LayoutError, RenderError, SpanError};
