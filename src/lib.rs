//! # Shinsa - Flow-Graph Eligibility and Traversal Engine
//!
//! **Shinsa** drives intake questionnaires whose set of applicable questions depends on
//! earlier answers. Some questions are always asked (*gateways*); others (*follow-ons*)
//! only appear while a small trigger expression over previous answers holds.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Flow**: Parse a flow document with `FlowDefinition::from_json_str`, or
//!     implement `IntoFlow` for your own format.
//! 2.  **Build the Graph**: `FlowGraph::new` computes the fixed Flow Order and parses every
//!     trigger once. The graph is immutable and can be shared behind an `Arc`.
//! 3.  **Resolve Eligibility**: `EligibilityResolver` filters the Flow Order to the questions
//!     in play for a given answer map and finds the next one to ask.
//! 4.  **Navigate**: `Navigator` is the session state machine. It records answers, steps back,
//!     rewinds on edits, and prunes answers that fell out of play.
//!
//! Trigger problems never surface as errors. A clause that does not parse, references an
//! unanswered node, or compares incompatible values is simply false, so the question it
//! guards is skipped.
//!
//! ## Quick Start
//!
//! ```rust
//! use shinsa::prelude::*;
//! use std::sync::Arc;
//!
//! let flow = r#"{
//!     "root_nodes": ["smoker"],
//!     "nodes": [
//!         { "id": "smoker", "section": "Health", "type": "gateway",
//!           "question": "Do you smoke?", "answer_type": "boolean",
//!           "children": ["packs"] },
//!         { "id": "packs", "section": "Health", "type": "follow_on",
//!           "question": "How many packs a day?", "answer_type": "integer",
//!           "trigger": "smoker == Yes" }
//!     ]
//! }"#;
//!
//! let graph = Arc::new(FlowGraph::from_json_str(flow).unwrap());
//! let mut navigator = Navigator::new(graph, NavigatorConfig::default()).unwrap();
//!
//! // A "no" leaves the follow-on out of play, so the flow goes straight to review.
//! let outcome = navigator.submit_answer("no").unwrap();
//! assert_eq!(outcome, SubmitOutcome::ReadyForReview);
//! assert_eq!(navigator.eligible_ids(), vec!["smoker"]);
//!
//! // Editing the answer rewinds the session and the follow-on comes into play.
//! navigator.edit_answer("smoker").unwrap();
//! let outcome = navigator.submit_answer("yes").unwrap();
//! assert_eq!(outcome, SubmitOutcome::Advanced("packs".to_string()));
//! ```

pub mod answer;
pub mod error;
pub mod flow;
pub mod graph;
pub mod prelude;
pub mod resolver;
pub mod session;
pub mod trace;
pub mod trigger;
