//! Annotation Visualizer WASM API
//!
//! This module provides the JavaScript-facing API. Payloads cross the
//! boundary as plain objects via serde; errors come back as strings.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization and error conversion
//! - `spans`: Segmentation and span ordering
//! - `render`: Display list assembly and chunk text rendering

pub mod helpers;
pub mod spans;
pub mod render;

pub use spans::{compare_spans, split_multiline_offsets_js};
pub use render::{build_display_list, render_chunk_text};
