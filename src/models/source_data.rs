//! Source payload for one document
//!
//! This is the shape the editor sends over: document text, token offsets and
//! annotations. Nothing here is validated beyond what deserialization needs;
//! inconsistencies surface when the document is assembled.

use super::annotations::Normalization;
use super::offsets::OffsetsList;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything needed to lay out one document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceData {
    pub text: String,

    /// Token boundaries, ascending and non-overlapping
    pub token_offsets: OffsetsList,

    pub entities: Vec<EntityPayload>,

    pub relations: Vec<RelationPayload>,

    pub normalizations: Vec<Normalization>,
}

/// One span annotation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityPayload {
    pub id: String,

    #[serde(rename = "type")]
    pub entity_type: String,

    /// Raw offsets; may be discontiguous and may cross line breaks
    pub offsets: OffsetsList,

    #[serde(default = "default_general_type")]
    pub general_type: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub label_text: Option<String>,

    #[serde(default)]
    pub hidden: bool,
}

fn default_general_type() -> String {
    "entity".to_string()
}

/// A relation, given as `[role, span id]` arguments; the first is the origin
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelationPayload {
    pub id: String,

    #[serde(rename = "type")]
    pub relation_type: String,

    pub arguments: Vec<Argument>,
}

/// Relation argument, on the wire as `[label, target]`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Argument {
    pub label: String,
    pub target: String,
}

impl From<(String, String)> for Argument {
    fn from((label, target): (String, String)) -> Self {
        Self { label, target }
    }
}

impl From<Argument> for (String, String) {
    fn from(argument: Argument) -> Self {
        (argument.label, argument.target)
    }
}
