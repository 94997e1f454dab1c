use serde::{Deserialize, Serialize};

/// Work item types recognized for decomposition.
///
/// Serialized forms match the tracker's display names (`"Product Backlog
/// Item"`, `"User Story"`), which is also how they appear in the raw payload
/// handed to the submission glue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkItemTypeName {
    Epic,
    Feature,
    #[serde(rename = "Product Backlog Item")]
    ProductBacklogItem,
    #[serde(rename = "User Story")]
    UserStory,
    Task,
    Bug,
}

impl WorkItemTypeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Epic => "Epic",
            Self::Feature => "Feature",
            Self::ProductBacklogItem => "Product Backlog Item",
            Self::UserStory => "User Story",
            Self::Task => "Task",
            Self::Bug => "Bug",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Epic" => Some(Self::Epic),
            "Feature" => Some(Self::Feature),
            "Product Backlog Item" => Some(Self::ProductBacklogItem),
            "User Story" => Some(Self::UserStory),
            "Task" => Some(Self::Task),
            "Bug" => Some(Self::Bug),
            _ => None,
        }
    }
}
