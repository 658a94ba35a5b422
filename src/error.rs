use crate::session::ViewState;
use thiserror::Error;

/// Errors that can occur while loading or converting a flow document.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read flow file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid custom flow data: {0}")]
    ConversionError(String),

    #[error("Flow definition has no root nodes, so there is no question to start from")]
    NoRootNodes,
}

/// Errors surfaced by the navigation controller. A rejected operation never
/// mutates the session, except for the unclear-answer counter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Node '{0}' does not exist in the flow definition")]
    UnknownNode(String),

    #[error("Node '{0}' cannot be edited: it is neither in the history nor the current question")]
    InvalidEditTarget(String),

    #[error("Operation '{operation}' is not allowed while the session is in the {view} view")]
    InvalidTransition {
        operation: &'static str,
        view: ViewState,
    },

    #[error("Answer for '{node_id}' was rejected: {reason}")]
    RejectedAnswer { node_id: String, reason: String },
}

/// Errors raised by a session store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not access session file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored session could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Session could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}
