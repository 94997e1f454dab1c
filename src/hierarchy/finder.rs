//! Stateless recursive lookups over a forest of work item nodes.
//!
//! Termination relies on the forest being finite and acyclic, which is the
//! constructing collaborator's responsibility; nothing here defends against
//! cycles.

use crate::models::WorkItemNode;

/// Count every node in the forest, at every depth.
pub fn count_nodes(forest: &[WorkItemNode]) -> usize {
    forest.iter().map(|node| 1 + count_nodes(&node.children)).sum()
}

/// Depth-first pre-order search for a node by its temporary id.
///
/// Each node is visited before its children, children in array order. Ids are
/// expected to be unique within a snapshot; if a duplicate slips in, the
/// first match in that order wins.
pub fn find_node<'a>(forest: &'a [WorkItemNode], id: &str) -> Option<&'a WorkItemNode> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_node`], same traversal order.
pub fn find_node_mut<'a>(
    forest: &'a mut [WorkItemNode],
    id: &str,
) -> Option<&'a mut WorkItemNode> {
    for node in forest.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}
