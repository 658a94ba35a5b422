//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the shinsa crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use shinsa::prelude::*;
//! use std::sync::Arc;
//!
//! # fn run_example() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = Arc::new(FlowGraph::new(FlowDefinition::from_file("data/flows/intake.json")?));
//! let mut navigator = Navigator::new(graph, NavigatorConfig::default())?;
//!
//! println!("{}", navigator.current_node()?.question);
//! navigator.submit_answer("yes")?;
//! # Ok(())
//! # }
//! ```

// Flow loading and the static graph
pub use crate::flow::{AnswerType, FlowDefinition, FlowNodeDefinition, IntoFlow, NodeKind};
pub use crate::graph::{FlowGraph, FlowNode};

// Answers and coercion
pub use crate::answer::{
    AnswerMap, AnswerRecord, AnswerRejection, TypedValue, coerce, validate_answer,
};

// Triggers and eligibility
pub use crate::resolver::{EligibilityResolver, Progress};
pub use crate::trigger::{AnswerSource, TriggerEngine, TriggerExpression, TriggerTrace};

// Sessions
pub use crate::session::{
    JsonFileStore, Navigator, NavigatorConfig, SessionState, SessionStore, SubmitOutcome,
    ViewState,
};

// Error types
pub use crate::error::{FlowError, NavigationError, StoreError};

// Trace formatting
pub use crate::trace::TraceFormatter;
