//! Document layout preparation
//!
//! This module turns a source payload into the structures the row layout
//! and drawing stages consume: chunks that tile the text, spans with sorted
//! fragments, fragments attached to chunks, and a deterministic span order.
//! Geometry itself (widths, rows, arc routing) is computed elsewhere and
//! handed back as placements.

pub mod config;
pub mod chunks;
pub mod assignment;
pub mod document;
pub mod display_list;

pub use config::VisualizerConfig;
pub use chunks::build_chunks;
pub use assignment::assign_fragments;
pub use document::{ChunkPlacement, VisualDocument};
pub use display_list::{DisplayList, SpanView};
