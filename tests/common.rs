//! Common test utilities for building flows, graphs and answer sets.
use shinsa::prelude::*;
use std::sync::Arc;

/// The sample life-insurance intake flow shipped with the CLI.
#[allow(dead_code)]
pub const INTAKE_FLOW_JSON: &str = include_str!("../data/flows/intake.json");

#[allow(dead_code)]
pub fn intake_graph() -> Arc<FlowGraph> {
    Arc::new(FlowGraph::from_json_str(INTAKE_FLOW_JSON).expect("sample flow should parse"))
}

/// A gateway node with the given children.
#[allow(dead_code)]
pub fn gateway(id: &str, answer_type: AnswerType, children: &[&str]) -> FlowNodeDefinition {
    FlowNodeDefinition {
        id: id.to_string(),
        section: "Test".to_string(),
        kind: NodeKind::Gateway,
        question: format!("Question {}?", id),
        answer_type,
        trigger: None,
        children: children.iter().map(|c| c.to_string()).collect(),
        helper_text: None,
        placeholder: None,
        options: Vec::new(),
    }
}

/// A follow-on node gated by `trigger`.
#[allow(dead_code)]
pub fn follow_on(id: &str, answer_type: AnswerType, trigger: &str) -> FlowNodeDefinition {
    FlowNodeDefinition {
        kind: NodeKind::FollowOn,
        trigger: Some(trigger.to_string()),
        ..gateway(id, answer_type, &[])
    }
}

/// Four text gateways `A`, `B`, `C`, `D` asked in that order.
#[allow(dead_code)]
pub fn linear_flow() -> FlowDefinition {
    FlowDefinition {
        root_nodes: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        nodes: ["A", "B", "C", "D"]
            .iter()
            .map(|id| gateway(id, AnswerType::Text, &[]))
            .collect(),
    }
}

/// Typed fixtures for the trigger scenarios.
///
/// Flow order: smoker, packs, age, consent, coverage_amount, region, review_gate.
#[allow(dead_code)]
pub fn scenario_flow() -> FlowDefinition {
    FlowDefinition {
        root_nodes: vec![
            "smoker".into(),
            "age".into(),
            "coverage_amount".into(),
            "region".into(),
        ],
        nodes: vec![
            gateway("smoker", AnswerType::Boolean, &["packs"]),
            follow_on("packs", AnswerType::Integer, "smoker == Yes"),
            gateway("age", AnswerType::Integer, &["consent"]),
            follow_on("consent", AnswerType::Text, "age < 18"),
            gateway("coverage_amount", AnswerType::Decimal, &[]),
            gateway("region", AnswerType::Text, &["review_gate"]),
            follow_on(
                "review_gate",
                AnswerType::Text,
                "coverage_amount > 1000000 OR region CONTAINS international",
            ),
        ],
    }
}

/// Builds an answer map, snapshotting question data from the graph where the node exists.
#[allow(dead_code)]
pub fn answers(graph: &FlowGraph, pairs: &[(&str, &str)]) -> AnswerMap {
    pairs
        .iter()
        .map(|(id, answer)| {
            let record = match graph.node_by_id(id) {
                Some(node) => AnswerRecord::new(node, answer),
                None => AnswerRecord {
                    node_id: id.to_string(),
                    question: String::new(),
                    section: String::new(),
                    answer: answer.to_string(),
                    answer_type: AnswerType::Text,
                },
            };
            (id.to_string(), record)
        })
        .collect()
}

#[allow(dead_code)]
pub fn navigator_for(definition: FlowDefinition) -> Navigator {
    Navigator::new(Arc::new(FlowGraph::new(definition)), NavigatorConfig::default())
        .expect("flow should have a root node")
}

/// Answers every question in turn until the session leaves the wizard.
#[allow(dead_code)]
pub fn answer_all(navigator: &mut Navigator, answer: &str) {
    while navigator.view() == ViewState::Wizard {
        navigator.submit_answer(answer).expect("answer should be accepted");
    }
}
