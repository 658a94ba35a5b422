use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for the navigation controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Consecutive rejected answers after which the session is handed to an agent.
    /// `0` disables the hand-off.
    pub unclear_limit: u32,
    /// Phrases that, when found in an accepted answer, hand the session to an agent.
    pub agent_keywords: Vec<String>,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            unclear_limit: 2,
            agent_keywords: Vec::new(),
        }
    }
}

impl NavigatorConfig {
    pub fn with_unclear_limit(mut self, limit: u32) -> Self {
        self.unclear_limit = limit;
        self
    }

    pub fn with_agent_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agent_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, FlowError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FlowError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FlowError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Case-insensitive substring match against the configured keywords.
    pub fn matches_agent_keyword(&self, answer: &str) -> bool {
        let folded = answer.to_lowercase();
        self.agent_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .any(|k| !k.is_empty() && folded.contains(&k))
    }

    pub(crate) fn unclear_limit_reached(&self, count: u32) -> bool {
        self.unclear_limit > 0 && count >= self.unclear_limit
    }
}
