//! Structural edits on a managed hierarchy.
//!
//! The state manager implements no inserts, removals, or reparenting of its
//! own; those go through its raw-reference escape hatch, which obligates the
//! caller to reconcile the cached node count afterward. [`HierarchyEditor`]
//! packages that contract so the obligation lives in one place instead of at
//! every call site.

use thiserror::Error;

use crate::models::WorkItemNode;

use super::finder;
use super::state::HierarchyStateManager;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("node not found: {0}")]
    NodeNotFound(String),
    #[error("parent node not found: {0}")]
    ParentNotFound(String),
    #[error("cannot move {id} under {target}: target is within its subtree")]
    WouldCreateCycle { id: String, target: String },
}

/// Structural-editing collaborator for a [`HierarchyStateManager`].
///
/// Borrows the manager exclusively for the duration of an edit sequence, so
/// nothing else can observe a half-adjusted count. Failed edits leave the
/// forest and the count exactly as they were.
pub struct HierarchyEditor<'a> {
    state: &'a mut HierarchyStateManager,
}

impl<'a> HierarchyEditor<'a> {
    pub fn new(state: &'a mut HierarchyStateManager) -> Self {
        Self { state }
    }

    /// Append `node` (and its subtree) under `parent_id`, or as a new root
    /// when `parent_id` is `None`.
    pub fn insert_child(
        &mut self,
        parent_id: Option<&str>,
        node: WorkItemNode,
    ) -> Result<(), EditError> {
        let added = 1 + finder::count_nodes(&node.children);
        match parent_id {
            Some(pid) => {
                let parent = finder::find_node_mut(self.state.hierarchy_mut(), pid)
                    .ok_or_else(|| EditError::ParentNotFound(pid.to_string()))?;
                parent.children.push(node);
            }
            None => self.state.hierarchy_mut().push(node),
        }
        self.state.update_hierarchy_count(added as isize);
        Ok(())
    }

    /// Detach and return the subtree rooted at `id`.
    pub fn remove_node(&mut self, id: &str) -> Result<WorkItemNode, EditError> {
        let node = detach(self.state.hierarchy_mut(), id)
            .ok_or_else(|| EditError::NodeNotFound(id.to_string()))?;
        let removed = 1 + finder::count_nodes(&node.children);
        self.state.update_hierarchy_count(-(removed as isize));
        Ok(node)
    }

    /// Move the subtree rooted at `id` under `new_parent_id`, or to the root
    /// level when `None`. The node population is unchanged, so the cached
    /// count is too.
    pub fn reparent(&mut self, id: &str, new_parent_id: Option<&str>) -> Result<(), EditError> {
        if let Some(pid) = new_parent_id {
            let moving = self
                .state
                .find_node_by_id(id)
                .ok_or_else(|| EditError::NodeNotFound(id.to_string()))?;
            if pid == id || finder::find_node(&moving.children, pid).is_some() {
                return Err(EditError::WouldCreateCycle {
                    id: id.to_string(),
                    target: pid.to_string(),
                });
            }
            if self.state.find_node_by_id(pid).is_none() {
                return Err(EditError::ParentNotFound(pid.to_string()));
            }
        }

        let node = detach(self.state.hierarchy_mut(), id)
            .ok_or_else(|| EditError::NodeNotFound(id.to_string()))?;

        match new_parent_id {
            Some(pid) => match finder::find_node_mut(self.state.hierarchy_mut(), pid) {
                Some(parent) => parent.children.push(node),
                None => {
                    // Existence was checked before the detach; reattach at the
                    // root rather than lose the subtree.
                    self.state.hierarchy_mut().push(node);
                    return Err(EditError::ParentNotFound(pid.to_string()));
                }
            },
            None => self.state.hierarchy_mut().push(node),
        }
        Ok(())
    }
}

/// Remove the first node matching `id` from the forest, searching in the same
/// pre-order as [`finder::find_node`].
fn detach(forest: &mut Vec<WorkItemNode>, id: &str) -> Option<WorkItemNode> {
    for index in 0..forest.len() {
        if forest[index].id == id {
            return Some(forest.remove(index));
        }
        if let Some(found) = detach(&mut forest[index].children, id) {
            return Some(found);
        }
    }
    None
}
