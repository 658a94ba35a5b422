use crate::answer::AnswerMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    Wizard,
    Review,
    AgentExit,
    ThankYou,
}

impl ViewState {
    /// `AgentExit` and `ThankYou` end the session; only a restart leaves them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ViewState::AgentExit | ViewState::ThankYou)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewState::Wizard => "WIZARD",
            ViewState::Review => "REVIEW",
            ViewState::AgentExit => "AGENT_EXIT",
            ViewState::ThankYou => "THANK_YOU",
        };
        write!(f, "{}", name)
    }
}

/// Everything a session needs to be persisted and restored verbatim.
///
/// In `Wizard` the history never contains the current node. In `Review` the
/// current node is the last one answered and is also the last history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_node_id: String,
    #[serde(default)]
    pub answers: AnswerMap,
    #[serde(default)]
    pub history: Vec<String>,
    pub view: ViewState,
    /// Consecutive rejected answers since the last accepted one.
    #[serde(default)]
    pub unclear_count: u32,
    /// How the user asked to be contacted after an agent hand-off.
    #[serde(default)]
    pub callback_contact: Option<String>,
}

impl SessionState {
    pub fn new(initial_node_id: impl Into<String>) -> Self {
        Self {
            current_node_id: initial_node_id.into(),
            answers: AnswerMap::default(),
            history: Vec::new(),
            view: ViewState::Wizard,
            unclear_count: 0,
            callback_contact: None,
        }
    }
}
