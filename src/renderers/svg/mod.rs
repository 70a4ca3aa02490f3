//! SVG rendering output
//!
//! Collects text groups and serialises them to SVG markup.

pub mod elements;
pub mod document;

pub use document::SvgDocument;

use super::{DrawingSurface, GroupId, TextNode};
use crate::models::RenderError;
use serde::Serialize;

/// A `<g>` element holding text nodes
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SvgGroup {
    pub class: String,
    pub nodes: Vec<TextNode>,
}

/// In-memory SVG drawing surface
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SvgSurface {
    groups: Vec<SvgGroup>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[SvgGroup] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&SvgGroup> {
        self.groups.get(id)
    }

    /// Total text nodes over all groups
    pub fn node_count(&self) -> usize {
        self.groups.iter().map(|g| g.nodes.len()).sum()
    }

    /// Markup for every group, without the outer `<svg>` element
    pub fn to_markup(&self) -> String {
        self.groups.iter().map(elements::group_markup).collect()
    }
}

impl DrawingSurface for SvgSurface {
    fn create_group(&mut self, class: &str) -> GroupId {
        self.groups.push(SvgGroup {
            class: class.to_string(),
            nodes: Vec::new(),
        });
        self.groups.len() - 1
    }

    fn add_text(&mut self, group: GroupId, node: TextNode) -> Result<(), RenderError> {
        self.groups
            .get_mut(group)
            .ok_or(RenderError::UnknownGroup(group))?
            .nodes
            .push(node);
        Ok(())
    }
}
