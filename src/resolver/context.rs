use crate::answer::{AnswerMap, TypedValue, coerce};
use crate::graph::FlowGraph;
use crate::trigger::AnswerSource;

/// Reads answers the way triggers see them: coerced with the referenced
/// node's own declared type. Unknown nodes and unparsable text are absent.
pub struct AnswerContext<'a> {
    graph: &'a FlowGraph,
    answers: &'a AnswerMap,
}

impl<'a> AnswerContext<'a> {
    pub fn new(graph: &'a FlowGraph, answers: &'a AnswerMap) -> Self {
        Self { graph, answers }
    }
}

impl AnswerSource for AnswerContext<'_> {
    fn typed_answer(&self, node_id: &str) -> Option<TypedValue> {
        let record = self.answers.get(node_id)?;
        let node = self.graph.node_by_id(node_id)?;
        coerce(node.answer_type, &record.answer)
    }
}
