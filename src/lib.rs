//! Annotation Visualizer WASM Module
//!
//! Converts character-offset annotations over a document into units an SVG
//! text-annotation visualizer can draw: spans are split at line breaks into
//! line-safe fragments, fragments are ordered and attached to token chunks,
//! and spans are sorted left to right for row layout and arc routing.

pub mod text;
pub mod models;
pub mod layout;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use text::{DocumentText, Segmentation, SegmentationConfig};
pub use layout::{DisplayList, VisualDocument, VisualizerConfig};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Annotation visualizer WASM module initialized");
}
