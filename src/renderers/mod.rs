//! Renderers module for the annotation visualizer
//!
//! Drawing happens on a [`DrawingSurface`]: an append-only sink of positioned
//! text nodes organised in groups. The SVG surface is the one shipped here;
//! the browser can also consume the collected nodes directly.

pub mod svg;

use crate::models::RenderError;
use serde::{Deserialize, Serialize};

/// Handle to a group on a drawing surface
pub type GroupId = usize;

/// A positioned piece of text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub x: f32,
    pub y: f32,

    /// Extra attributes, e.g. `data-chunk-id`
    pub attributes: Vec<(String, String)>,
}

/// Append-only sink for rendered text
pub trait DrawingSurface {
    /// Create an empty group with the given CSS class
    fn create_group(&mut self, class: &str) -> GroupId;

    /// Append a text node to an existing group
    fn add_text(&mut self, group: GroupId, node: TextNode) -> Result<(), RenderError>;
}

pub use svg::SvgSurface;
