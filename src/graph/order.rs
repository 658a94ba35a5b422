use crate::flow::{FlowDefinition, FlowNodeDefinition};
use ahash::AHashMap;
use itertools::Itertools;
use std::iter;

/// Flattens the definition into its fixed Flow Order.
///
/// Each root is followed by its direct children, in declared order. An id is
/// kept at its first occurrence only. Grandchildren are not expanded.
pub(super) fn build_flow_order(definition: &FlowDefinition) -> Vec<String> {
    let by_id: AHashMap<&str, &FlowNodeDefinition> = definition
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n))
        .collect();

    definition
        .root_nodes
        .iter()
        .flat_map(|root| {
            let children = by_id
                .get(root.as_str())
                .into_iter()
                .flat_map(|node| node.children.iter());
            iter::once(root).chain(children)
        })
        .unique()
        .cloned()
        .collect()
}
