use super::config::NavigatorConfig;
use super::state::{SessionState, ViewState};
use crate::answer::{AnswerRecord, AnswerRejection, validate_answer};
use crate::error::{FlowError, NavigationError};
use crate::graph::{FlowGraph, FlowNode};
use crate::resolver::{EligibilityResolver, Progress};
use ahash::AHashSet;
use log::{debug, warn};
use std::sync::Arc;

/// Where a submitted answer took the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session moved on to this node.
    Advanced(String),
    /// No eligible question remains; the session is in review.
    ReadyForReview,
    /// The session was handed to an agent, by keyword or by repeated unclear answers.
    HandedToAgent,
}

/// One line of the review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewItem<'a> {
    /// 1-based question number as shown to the user.
    pub number: usize,
    pub record: &'a AnswerRecord,
}

/// The session state machine.
///
/// Every operation computes the next state in full before replacing the
/// current one, so a rejected operation leaves the session untouched.
pub struct Navigator {
    graph: Arc<FlowGraph>,
    config: NavigatorConfig,
    state: SessionState,
}

impl Navigator {
    /// Starts a fresh session on the first root node.
    pub fn new(graph: Arc<FlowGraph>, config: NavigatorConfig) -> Result<Self, FlowError> {
        let initial = graph.initial_node_id().ok_or(FlowError::NoRootNodes)?;
        let state = SessionState::new(initial);
        Ok(Self {
            graph,
            config,
            state,
        })
    }

    /// Re-hydrates a persisted session as-is.
    ///
    /// The stored current node may no longer exist if the flow changed between
    /// sessions; `current_node` reports that and the caller should restart.
    pub fn resume(graph: Arc<FlowGraph>, config: NavigatorConfig, state: SessionState) -> Self {
        if graph.node_by_id(&state.current_node_id).is_none() {
            warn!(
                "Resumed session points at unknown node '{}'",
                state.current_node_id
            );
        }
        Self {
            graph,
            config,
            state,
        }
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> ViewState {
        self.state.view
    }

    pub fn current_node(&self) -> Result<&FlowNode, NavigationError> {
        self.graph
            .node_by_id(&self.state.current_node_id)
            .ok_or_else(|| NavigationError::UnknownNode(self.state.current_node_id.clone()))
    }

    /// The stored answer for the current node, used to prefill the input.
    pub fn previous_answer(&self) -> Option<&str> {
        self.state
            .answers
            .get(&self.state.current_node_id)
            .map(|r| r.answer.as_str())
    }

    pub fn eligible_ids(&self) -> Vec<&str> {
        self.resolver().eligible_ids(&self.state.answers)
    }

    pub fn progress(&self) -> Progress {
        self.resolver()
            .progress(&self.state.current_node_id, &self.state.answers)
    }

    /// Visited nodes in order, paired with their answers. Nodes without an answer are skipped.
    pub fn review_items(&self) -> Vec<ReviewItem<'_>> {
        self.state
            .history
            .iter()
            .filter_map(|id| self.state.answers.get(id))
            .enumerate()
            .map(|(i, record)| ReviewItem {
                number: i + 1,
                record,
            })
            .collect()
    }

    /// Records an answer for the current node and moves to the next eligible one.
    ///
    /// Answers and history entries for nodes that are no longer eligible are pruned.
    /// An answer containing an agent keyword hands off before it is validated. A
    /// rejected non-blank answer counts as unclear; reaching the configured limit
    /// hands the session to an agent instead of returning an error.
    pub fn submit_answer(&mut self, text: &str) -> Result<SubmitOutcome, NavigationError> {
        self.ensure_view("submit_answer", &[ViewState::Wizard])?;
        let resolver = EligibilityResolver::new(&self.graph);
        let node = self
            .graph
            .node_by_id(&self.state.current_node_id)
            .ok_or_else(|| NavigationError::UnknownNode(self.state.current_node_id.clone()))?;

        let current = node.id.clone();
        let mut answers = self.state.answers.clone();

        if self.config.matches_agent_keyword(text) {
            debug!("Answer for '{}' asked for an agent", current);
            answers.insert(current, AnswerRecord::new(node, text));
            self.state.answers = answers;
            self.state.unclear_count = 0;
            self.state.view = ViewState::AgentExit;
            return Ok(SubmitOutcome::HandedToAgent);
        }

        if let Err(rejection) = validate_answer(node, text) {
            // Blank input is not an attempt at an answer and never counts as unclear.
            if rejection != AnswerRejection::Empty {
                self.state.unclear_count += 1;
            }
            debug!(
                "Rejected answer for '{}' ({} unclear in a row): {}",
                node.id, self.state.unclear_count, rejection
            );
            if self.config.unclear_limit_reached(self.state.unclear_count) {
                debug!("Unclear answer limit reached, handing off to an agent");
                self.state.view = ViewState::AgentExit;
                return Ok(SubmitOutcome::HandedToAgent);
            }
            return Err(NavigationError::RejectedAnswer {
                node_id: node.id.clone(),
                reason: rejection.to_string(),
            });
        }

        answers.insert(current.clone(), AnswerRecord::new(node, text));

        // Dropping an answer can take out follow-ons that read it, so prune to a fixed point.
        let eligible: AHashSet<&str> = loop {
            let eligible: AHashSet<&str> = resolver.eligible_ids(&answers).into_iter().collect();
            let before = answers.len();
            answers.retain(|id, _| eligible.contains(id.as_str()));
            if answers.len() == before {
                break eligible;
            }
        };
        let mut history: Vec<String> = self
            .state
            .history
            .iter()
            .filter(|id| **id != current && eligible.contains(id.as_str()))
            .cloned()
            .collect();
        history.push(current.clone());

        let next = resolver.next_id(&current, &answers).map(str::to_string);
        let (current_node_id, view, outcome) = match next {
            Some(next) => (
                next.clone(),
                ViewState::Wizard,
                SubmitOutcome::Advanced(next),
            ),
            None => (current, ViewState::Review, SubmitOutcome::ReadyForReview),
        };
        debug!("Submitted answer, now at '{}' ({})", current_node_id, view);

        self.state = SessionState {
            current_node_id,
            answers,
            history,
            view,
            unclear_count: 0,
            callback_contact: None,
        };
        Ok(outcome)
    }

    /// Steps back to the previous question. Does nothing on an empty history.
    pub fn go_back(&mut self) -> Result<(), NavigationError> {
        self.ensure_view("go_back", &[ViewState::Wizard, ViewState::Review])?;
        if let Some(previous) = self.state.history.pop() {
            debug!("Going back to '{}'", previous);
            self.state.current_node_id = previous;
            self.state.view = ViewState::Wizard;
        }
        Ok(())
    }

    /// Rewinds the session to `target`, discarding everything answered after it.
    pub fn edit_answer(&mut self, target: &str) -> Result<(), NavigationError> {
        self.ensure_view("edit_answer", &[ViewState::Wizard, ViewState::Review])?;

        let history = match self.state.history.iter().position(|id| id == target) {
            Some(index) => self.state.history[..index].to_vec(),
            None if self.state.current_node_id == target => self.state.history.clone(),
            None => return Err(NavigationError::InvalidEditTarget(target.to_string())),
        };

        let keep: AHashSet<&str> = history
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(target))
            .collect();
        let answers = self
            .state
            .answers
            .iter()
            .filter(|(id, _)| keep.contains(id.as_str()))
            .map(|(id, record)| (id.clone(), record.clone()))
            .collect();

        debug!("Editing '{}', keeping {} earlier steps", target, history.len());
        self.state = SessionState {
            current_node_id: target.to_string(),
            answers,
            history,
            view: ViewState::Wizard,
            unclear_count: 0,
            callback_contact: None,
        };
        Ok(())
    }

    /// Throws the session away and starts again on the first root node.
    pub fn restart(&mut self) {
        debug!("Restarting session");
        let initial = self.graph.initial_node_id().unwrap_or_default();
        self.state = SessionState::new(initial);
    }

    pub fn submit_review(&mut self) -> Result<(), NavigationError> {
        self.ensure_view("submit_review", &[ViewState::Review])?;
        self.state.view = ViewState::ThankYou;
        Ok(())
    }

    /// Hands the session to a human agent. Answers are kept for the hand-off.
    pub fn force_agent_exit(&mut self) -> Result<(), NavigationError> {
        self.ensure_view(
            "force_agent_exit",
            &[ViewState::Wizard, ViewState::Review, ViewState::AgentExit],
        )?;
        self.state.view = ViewState::AgentExit;
        Ok(())
    }

    /// Completes an agent hand-off with the user's preferred way to be contacted.
    pub fn finish_agent_exit(&mut self, contact: &str) -> Result<(), NavigationError> {
        self.ensure_view("finish_agent_exit", &[ViewState::AgentExit])?;
        let contact = contact.trim();
        self.state.callback_contact = (!contact.is_empty()).then(|| contact.to_string());
        self.state.view = ViewState::ThankYou;
        Ok(())
    }

    fn resolver(&self) -> EligibilityResolver<'_> {
        EligibilityResolver::new(&self.graph)
    }

    fn ensure_view(
        &self,
        operation: &'static str,
        allowed: &[ViewState],
    ) -> Result<(), NavigationError> {
        if allowed.contains(&self.state.view) {
            Ok(())
        } else {
            Err(NavigationError::InvalidTransition {
                operation,
                view: self.state.view,
            })
        }
    }
}
