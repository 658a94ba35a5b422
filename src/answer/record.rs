use crate::flow::AnswerType;
use crate::graph::FlowNode;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The answers of a session, keyed by node identifier.
pub type AnswerMap = AHashMap<String, AnswerRecord>;

/// One answered question. Question text and section are snapshotted at answer time
/// so the review screen shows what the user actually saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub node_id: String,
    pub question: String,
    #[serde(default)]
    pub section: String,
    pub answer: String,
    pub answer_type: AnswerType,
}

impl AnswerRecord {
    pub fn new(node: &FlowNode, answer: &str) -> Self {
        Self {
            node_id: node.id.clone(),
            question: node.question.clone(),
            section: node.section.clone(),
            answer: answer.to_string(),
            answer_type: node.answer_type,
        }
    }
}
