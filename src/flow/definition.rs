use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The complete, canonical definition of an intake flow, as handed over by the loader.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub root_nodes: Vec<String>,
    pub nodes: Vec<FlowNodeDefinition>,
}

/// Defines a single question in the intake flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNodeDefinition {
    pub id: String,
    #[serde(default)]
    pub section: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub question: String,
    pub answer_type: AnswerType,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub helper_text: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Allowed answers for `select` nodes. Ignored for every other answer type.
    #[serde(default)]
    pub options: Vec<String>,
}

/// Whether a node is always asked or gated behind a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Gateway,
    #[serde(alias = "follow-on", alias = "followon")]
    FollowOn,
}

/// The declared type of the answer a node expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    #[serde(alias = "bool")]
    Boolean,
    #[serde(alias = "int")]
    Integer,
    #[serde(alias = "number", alias = "float")]
    Decimal,
    Date,
    #[serde(alias = "string")]
    Text,
    #[serde(alias = "single_select", alias = "choice")]
    Select,
}

impl FlowDefinition {
    /// Parses a flow document from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, FlowError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a flow document from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FlowError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FlowError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

impl std::fmt::Display for AnswerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnswerType::Boolean => "boolean",
            AnswerType::Integer => "integer",
            AnswerType::Decimal => "decimal",
            AnswerType::Date => "date",
            AnswerType::Text => "text",
            AnswerType::Select => "select",
        };
        write!(f, "{}", name)
    }
}
