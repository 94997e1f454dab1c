//! Hierarchy state container and tree utilities.
//!
//! [`HierarchyStateManager`] holds the forest for one editing session behind
//! a copy-in/copy-out boundary. [`finder`] provides the recursive count and
//! lookup primitives it is built on, and [`HierarchyEditor`] is the trusted
//! collaborator that performs structural edits through the manager's escape
//! hatch while keeping its count cache honest.

mod editor;
pub mod finder;
mod state;

pub use editor::{EditError, HierarchyEditor};
pub use state::{ErrorHandler, HierarchyStateManager};
