//! Layer 0: Document Text
//!
//! Pure text addressing with no knowledge of annotations or rendering.
//!
//! ## Addressing
//!
//! All offsets are zero-based UTF-16 code-unit indices with exclusive ends,
//! the same unit the browser uses for string positions. Annotation payloads
//! arrive in this unit, so nothing here deals with graphemes or `char`
//! boundaries.
//!
//! ## Modules
//!
//! - `document_text`: Code-unit addressable document text
//! - `segmentation`: Splitting offset ranges at line breaks

pub mod document_text;
pub mod segmentation;

// Re-exports for convenience
pub use document_text::DocumentText;
pub use segmentation::{split_multiline_offsets, Segmentation, SegmentationConfig};
