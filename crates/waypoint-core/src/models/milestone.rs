//! Milestone model definition.

use serde::{Deserialize, Serialize};

/// A named grouping of tasks inside a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Server-assigned identifier
    pub id: u64,

    /// Title of the milestone
    pub title: String,

    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Position among sibling milestones (not necessarily contiguous)
    pub order_index: u32,
}
