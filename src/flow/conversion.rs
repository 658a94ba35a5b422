use super::definition::FlowDefinition;
use crate::error::FlowError;

/// A trait for custom data models that can be converted into a Shinsa `FlowDefinition`.
///
/// This is the extension point for flow documents that are not stored in Shinsa's own
/// JSON layout. Implement it on your own structs to provide the translation layer; the
/// engine never inspects the original format.
///
/// # Example
///
/// ```rust,no_run
/// use shinsa::prelude::*;
/// use shinsa::error::FlowError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct Sheet { rows: Vec<(String, String)> }
///
/// // 2. Implement `IntoFlow` for your top-level struct.
/// impl IntoFlow for Sheet {
///     fn into_flow(self) -> Result<FlowDefinition, FlowError> {
///         let nodes: Vec<FlowNodeDefinition> = self
///             .rows
///             .into_iter()
///             .map(|(id, question)| FlowNodeDefinition {
///                 id,
///                 section: "General".to_string(),
///                 kind: NodeKind::Gateway,
///                 question,
///                 answer_type: AnswerType::Text,
/// #               trigger: None, children: vec![], helper_text: None,
/// #               placeholder: None, options: vec![],
///             })
///             .collect();
///         let root_nodes = nodes.iter().map(|n| n.id.clone()).collect();
///         Ok(FlowDefinition { root_nodes, nodes })
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a Shinsa-compatible flow definition.
    fn into_flow(self) -> Result<FlowDefinition, FlowError>;
}

impl IntoFlow for FlowDefinition {
    fn into_flow(self) -> Result<FlowDefinition, FlowError> {
        Ok(self)
    }
}
