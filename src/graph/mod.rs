use crate::error::FlowError;
use crate::flow::{AnswerType, FlowDefinition, FlowNodeDefinition, IntoFlow, NodeKind};
use crate::resolver::EligibilityResolver;
use crate::trigger::TriggerExpression;
use ahash::AHashMap;
use log::debug;

mod order;

use order::build_flow_order;

/// A question as held by the graph, with its trigger already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: String,
    pub section: String,
    pub kind: NodeKind,
    pub question: String,
    pub answer_type: AnswerType,
    pub trigger: Option<TriggerExpression>,
    pub children: Vec<String>,
    pub helper_text: Option<String>,
    pub placeholder: Option<String>,
    pub options: Vec<String>,
}

impl FlowNode {
    pub fn is_gateway(&self) -> bool {
        self.kind == NodeKind::Gateway
    }
}

impl From<FlowNodeDefinition> for FlowNode {
    fn from(def: FlowNodeDefinition) -> Self {
        let trigger = def.trigger.as_deref().map(TriggerExpression::parse);
        Self {
            id: def.id,
            section: def.section,
            kind: def.kind,
            question: def.question,
            answer_type: def.answer_type,
            trigger,
            children: def.children,
            helper_text: def.helper_text,
            placeholder: def.placeholder,
            options: def.options,
        }
    }
}

/// The static question graph: the node set plus its fixed Flow Order.
///
/// Built once and never mutated, so it can be shared behind an `Arc` by every
/// session and evaluation.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    roots: Vec<String>,
    order: Vec<String>,
    positions: AHashMap<String, usize>,
    nodes: AHashMap<String, FlowNode>,
}

impl FlowGraph {
    pub fn new(definition: FlowDefinition) -> Self {
        let order = build_flow_order(&definition);
        let positions = order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let mut nodes = AHashMap::with_capacity(definition.nodes.len());
        for def in definition.nodes {
            if nodes.contains_key(&def.id) {
                debug!("Duplicate node id '{}' ignored; first definition wins", def.id);
                continue;
            }
            nodes.insert(def.id.clone(), FlowNode::from(def));
        }

        debug!(
            "Built flow graph with {} nodes, {} in flow order",
            nodes.len(),
            order.len()
        );

        Self {
            roots: definition.root_nodes,
            order,
            positions,
            nodes,
        }
    }

    /// Converts a custom flow format and builds the graph from it.
    pub fn from_flow(flow: impl IntoFlow) -> Result<Self, FlowError> {
        Ok(Self::new(flow.into_flow()?))
    }

    pub fn from_json_str(json: &str) -> Result<Self, FlowError> {
        FlowDefinition::from_json_str(json).map(Self::new)
    }

    /// The fixed Flow Order of node identifiers.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn node_by_id(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    /// Index of `id` in the Flow Order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// The first declared root, where every session starts.
    pub fn initial_node_id(&self) -> Option<&str> {
        self.roots.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn resolver(&self) -> EligibilityResolver<'_> {
        EligibilityResolver::new(self)
    }
}
