//! Relations between spans
//!
//! Arc routing and drawing happen outside this crate; spans only record which
//! arcs start and end at them.

use serde::{Deserialize, Serialize};

/// A directed relation from one span to another
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelationArc {
    /// Relation id from the source payload
    pub id: String,

    /// Relation label
    #[serde(rename = "type")]
    pub arc_type: String,

    /// Span the arc starts at
    pub origin: String,

    /// Span the arc ends at
    pub target: String,

    /// Argument role of the target (e.g. "Arg2")
    #[serde(default)]
    pub role: Option<String>,
}

impl RelationArc {
    pub fn new(
        id: impl Into<String>,
        arc_type: impl Into<String>,
        origin: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            arc_type: arc_type.into(),
            origin: origin.into(),
            target: target.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
