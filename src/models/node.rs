use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::WorkItemTypeName;

/// One work item under construction in a decomposition hierarchy.
///
/// Nodes form an ordered tree via `children`; the order is the display and
/// creation order the user arranged, so it must be preserved. Ids are
/// temporary — assigned by the collaborator that created the node, unique
/// only within a single hierarchy snapshot, and replaced by tracker ids on
/// submission.
///
/// The state layer reads and writes `title` and nothing else. Every other
/// field the tracker glue puts on a node (description, assignee, priority,
/// estimates, ...) rides along in `payload` untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkItemNode {
    /// Temporary identifier, unique within one hierarchy snapshot.
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: WorkItemTypeName,
    #[serde(default)]
    pub children: Vec<WorkItemNode>,
    /// Passthrough fields this layer does not interpret.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl WorkItemNode {
    /// A childless node with an empty payload.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        item_type: WorkItemTypeName,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            item_type,
            children: Vec::new(),
            payload: Map::new(),
        }
    }
}
