//! In-memory state for work item hierarchies under decomposition.
//!
//! A decomposition session breaks one tracker work item into a tree of new
//! items — epics into features, features into stories and tasks — and edits
//! that tree interactively before anything is submitted to the tracker. This
//! crate owns the tree between those edits:
//!
//! - [`models`]: the node and type-name model shared with the tracker glue.
//! - [`hierarchy`]: the state container, its recursive tree lookups, and the
//!   structural editor that collaborators use for inserts, removals, and
//!   reparenting.
//!
//! The container is built to never interrupt an editing session: unknown-id
//! lookups are silent no-ops, and diagnostics flow through an optional
//! callback or `tracing`, never through panics or returned errors.

pub mod hierarchy;
pub mod models;

pub use hierarchy::{EditError, HierarchyEditor, HierarchyStateManager};
pub use models::{WorkItemNode, WorkItemTypeName};
