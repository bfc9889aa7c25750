//! Task model definition.

use serde::{Deserialize, Serialize};

use super::{TaskSize, TaskStatus};

/// A unit of work inside a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Server-assigned identifier
    pub id: u64,

    /// Brief title of the task
    pub title: String,

    /// Detailed description of the task
    #[serde(default)]
    pub description: Option<String>,

    /// Current status of the task
    pub status: TaskStatus,

    /// Due date, as entered by the user
    #[serde(default)]
    pub due_date: Option<String>,

    /// Relative size estimate
    #[serde(default)]
    pub estimate: Option<TaskSize>,

    /// Position of the task among its siblings
    pub order_index: u32,

    /// Milestone this task belongs to, if any
    #[serde(default)]
    pub milestone_id: Option<u64>,
}
