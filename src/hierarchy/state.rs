use std::fmt;

use crate::models::{WorkItemNode, WorkItemTypeName};

use super::finder;

/// Component target for diagnostics routed through `tracing`.
const LOG_TARGET: &str = "state_manager";

/// Sink for error messages supplied by the owning session.
pub type ErrorHandler = Box<dyn Fn(&str)>;

/// Single source of truth for one decomposition session's tree state.
///
/// The manager owns its forest outright. Reads hand out deep copies and
/// writes take ownership of their input, so callers cannot alias internal
/// state through the normal accessors. [`hierarchy_mut`] is the one
/// documented exception, reserved for structural-editing collaborators.
///
/// Alongside the forest it tracks a cached total node count, the conceptual
/// parent type of the roots, and the area/iteration paths of the item being
/// decomposed (pure passthrough, never validated here).
///
/// None of the operations fail: unknown-id lookups are silent no-ops, and
/// [`raise_error`] only reports, it never interrupts the session.
///
/// [`hierarchy_mut`]: HierarchyStateManager::hierarchy_mut
/// [`raise_error`]: HierarchyStateManager::raise_error
pub struct HierarchyStateManager {
    hierarchy: Vec<WorkItemNode>,
    parent_work_item_type: Option<WorkItemTypeName>,
    hierarchy_count: usize,
    error_handler: Option<ErrorHandler>,
    original_area_path: Option<String>,
    original_iteration_path: Option<String>,
}

impl HierarchyStateManager {
    // ============================================================
    // Construction
    // ============================================================

    /// Take ownership of an initial forest and cache its node count.
    pub fn new(initial_hierarchy: Vec<WorkItemNode>) -> Self {
        let hierarchy_count = finder::count_nodes(&initial_hierarchy);
        Self {
            hierarchy: initial_hierarchy,
            parent_work_item_type: None,
            hierarchy_count,
            error_handler: None,
            original_area_path: None,
            original_iteration_path: None,
        }
    }

    pub fn with_parent_type(mut self, parent_type: WorkItemTypeName) -> Self {
        self.parent_work_item_type = Some(parent_type);
        self
    }

    /// Route [`raise_error`](Self::raise_error) messages to `handler` instead
    /// of the log.
    pub fn with_error_handler(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.error_handler = Some(Box::new(handler));
        self
    }

    /// Carry the area and iteration paths of the source item.
    pub fn with_original_paths(
        mut self,
        area_path: impl Into<String>,
        iteration_path: impl Into<String>,
    ) -> Self {
        self.original_area_path = Some(area_path.into());
        self.original_iteration_path = Some(iteration_path.into());
        self
    }

    // ============================================================
    // Diagnostics
    // ============================================================

    /// Report an error through the handler supplied at construction, or at
    /// error level under the `state_manager` log target when none was.
    ///
    /// Side effect only; never fails and never interrupts the session.
    pub fn raise_error(&self, message: &str) {
        match &self.error_handler {
            Some(handler) => handler(message),
            None => tracing::error!(target: LOG_TARGET, "{message}"),
        }
    }

    // ============================================================
    // Metadata accessors
    // ============================================================

    pub fn set_parent_work_item_type(&mut self, item_type: WorkItemTypeName) {
        self.parent_work_item_type = Some(item_type);
    }

    pub fn get_parent_work_item_type(&self) -> Option<WorkItemTypeName> {
        self.parent_work_item_type
    }

    pub fn get_original_area_path(&self) -> Option<&str> {
        self.original_area_path.as_deref()
    }

    pub fn get_original_iteration_path(&self) -> Option<&str> {
        self.original_iteration_path.as_deref()
    }

    /// Overwrite both paths together; `None` clears a field.
    pub fn set_original_paths(
        &mut self,
        area_path: Option<String>,
        iteration_path: Option<String>,
    ) {
        self.original_area_path = area_path;
        self.original_iteration_path = iteration_path;
    }

    // ============================================================
    // Tree access
    // ============================================================

    /// Deep copy of the current forest.
    ///
    /// Mutating the returned value never affects internal state. This is the
    /// read path everything outside the trusted editors should use.
    pub fn get_hierarchy(&self) -> Vec<WorkItemNode> {
        self.hierarchy.clone()
    }

    /// Cached node count across the whole forest. O(1), no recount.
    pub fn get_hierarchy_count(&self) -> usize {
        self.hierarchy_count
    }

    /// Find a node by its temporary id in the live forest.
    ///
    /// Pre-order first match; see [`finder::find_node`].
    pub fn find_node_by_id(&self, id: &str) -> Option<&WorkItemNode> {
        finder::find_node(&self.hierarchy, id)
    }

    /// The live internal forest, exclusively borrowed — the escape hatch.
    ///
    /// Structural edits through this handle bypass copy protection. A caller
    /// that adds or removes nodes must reconcile the cache with
    /// [`update_hierarchy_count`], or use
    /// [`HierarchyEditor`](super::HierarchyEditor), which does so itself.
    ///
    /// [`update_hierarchy_count`]: Self::update_hierarchy_count
    pub fn hierarchy_mut(&mut self) -> &mut Vec<WorkItemNode> {
        &mut self.hierarchy
    }

    // ============================================================
    // Mutation
    // ============================================================

    /// Replace the forest wholesale, recount, and reset the parent type
    /// (`None` when the caller has no replacement). The original paths are
    /// not touched.
    pub fn set_initial_hierarchy(
        &mut self,
        nodes: Vec<WorkItemNode>,
        parent_type: Option<WorkItemTypeName>,
    ) {
        self.hierarchy_count = finder::count_nodes(&nodes);
        self.hierarchy = nodes;
        self.parent_work_item_type = parent_type;
    }

    /// Empty the forest and zero the count. Type and path metadata survive.
    pub fn clear_hierarchy(&mut self) {
        self.hierarchy.clear();
        self.hierarchy_count = 0;
    }

    /// Adjust the cached count after an escape-hatch edit (positive for
    /// inserts, negative for removals). Saturates at zero. The new value is
    /// not verified against a recount; keeping it honest is the editing
    /// caller's obligation.
    pub fn update_hierarchy_count(&mut self, delta: isize) {
        self.hierarchy_count = self.hierarchy_count.saturating_add_signed(delta);
    }

    /// Overwrite a node's title in place.
    ///
    /// An unknown id is a silent no-op; either way the caller gets a fresh
    /// deep copy of the forest back.
    pub fn update_item_title(&mut self, item_id: &str, new_title: &str) -> Vec<WorkItemNode> {
        if let Some(node) = finder::find_node_mut(&mut self.hierarchy, item_id) {
            node.title = new_title.to_string();
        }
        self.get_hierarchy()
    }
}

impl Default for HierarchyStateManager {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Debug for HierarchyStateManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyStateManager")
            .field("hierarchy", &self.hierarchy)
            .field("parent_work_item_type", &self.parent_work_item_type)
            .field("hierarchy_count", &self.hierarchy_count)
            .field("has_error_handler", &self.error_handler.is_some())
            .field("original_area_path", &self.original_area_path)
            .field("original_iteration_path", &self.original_iteration_path)
            .finish()
    }
}
