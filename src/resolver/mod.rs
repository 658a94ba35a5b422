//! Eligibility: which questions are in play for a given set of answers.
//!
//! Everything here is recomputed from scratch on every call. The resolver only
//! borrows the graph, so repeated calls with the same answers return the same result.

use crate::answer::AnswerMap;
use crate::graph::{FlowGraph, FlowNode};
use crate::trigger::{TriggerEngine, TriggerExpression, TriggerTrace};
use log::trace;

mod context;

pub use context::AnswerContext;

/// Where the current question sits among the eligible ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the current node, `None` if it is not eligible.
    pub position: Option<usize>,
    pub total: usize,
}

impl Progress {
    /// Completion in percent, clamped to 0..=100.
    pub fn percent(&self) -> u8 {
        match (self.position, self.total) {
            (Some(position), total) if total > 0 => ((position * 100) / total).min(100) as u8,
            _ => 0,
        }
    }
}

pub struct EligibilityResolver<'g> {
    graph: &'g FlowGraph,
}

impl<'g> EligibilityResolver<'g> {
    pub fn new(graph: &'g FlowGraph) -> Self {
        Self { graph }
    }

    /// Gateways are always eligible; follow-ons only when their trigger holds.
    /// A follow-on without a trigger is never eligible.
    pub fn is_node_eligible(&self, node: &FlowNode, answers: &AnswerMap) -> bool {
        if node.is_gateway() {
            return true;
        }
        let context = AnswerContext::new(self.graph, answers);
        let eligible = node
            .trigger
            .as_ref()
            .is_some_and(|expr| TriggerEngine::new(&context).evaluate(expr));
        trace!("Node '{}' eligible: {}", node.id, eligible);
        eligible
    }

    /// Unknown ids are never eligible.
    pub fn is_eligible(&self, id: &str, answers: &AnswerMap) -> bool {
        self.graph
            .node_by_id(id)
            .is_some_and(|node| self.is_node_eligible(node, answers))
    }

    /// The Flow Order filtered down to the nodes currently in play.
    pub fn eligible_ids(&self, answers: &AnswerMap) -> Vec<&'g str> {
        self.graph
            .order()
            .iter()
            .map(String::as_str)
            .filter(|id| self.is_eligible(id, answers))
            .collect()
    }

    /// The first eligible node strictly after `current` in the Flow Order.
    ///
    /// `None` means the flow is complete, or `current` is not part of the order.
    pub fn next_id(&self, current: &str, answers: &AnswerMap) -> Option<&'g str> {
        let position = self.graph.position(current)?;
        self.graph.order()[position + 1..]
            .iter()
            .map(String::as_str)
            .find(|id| self.is_eligible(id, answers))
    }

    pub fn progress(&self, current: &str, answers: &AnswerMap) -> Progress {
        let eligible = self.eligible_ids(answers);
        Progress {
            position: eligible.iter().position(|id| *id == current).map(|i| i + 1),
            total: eligible.len(),
        }
    }

    /// Parses and evaluates ad-hoc trigger text against the answers.
    pub fn evaluate_trigger(&self, trigger: &str, answers: &AnswerMap) -> bool {
        let context = AnswerContext::new(self.graph, answers);
        TriggerEngine::new(&context).evaluate(&TriggerExpression::parse(trigger))
    }

    /// A clause-by-clause account of a follow-on node's trigger. `None` for
    /// gateways, unknown ids, and follow-ons without a trigger.
    pub fn explain(&self, id: &str, answers: &AnswerMap) -> Option<TriggerTrace> {
        let node = self.graph.node_by_id(id)?;
        if node.is_gateway() {
            return None;
        }
        let context = AnswerContext::new(self.graph, answers);
        node.trigger
            .as_ref()
            .map(|expr| TriggerEngine::new(&context).trace(expr))
    }
}
