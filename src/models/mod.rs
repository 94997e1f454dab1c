//! Domain models for the hierarchy core.
//!
//! - [`WorkItemNode`]: one item in the tree being assembled, with an
//!   externally-assigned temporary id, a title, a type tag, ordered children,
//!   and an opaque passthrough payload.
//! - [`WorkItemTypeName`]: the recognized work item types a hierarchy can be
//!   decomposed into.

mod node;
mod work_item_type;

pub use node::*;
pub use work_item_type::*;
