//! Project model definitions.

use serde::{Deserialize, Serialize};

use super::{Milestone, Task};

/// A project as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Server-assigned identifier
    pub id: u64,

    /// Short title of the project
    pub title: String,

    /// Free-form description of what the project should achieve
    pub goal_text: String,

    /// Target date, as entered by the user
    #[serde(default)]
    pub deadline: Option<String>,

    /// Weekly time budget in hours
    #[serde(default)]
    pub hours_per_week: Option<u32>,
}

/// A project together with all of its milestones and tasks.
///
/// This is a read-only aggregate; the backend has no separate entity for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,

    #[serde(default)]
    pub milestones: Vec<Milestone>,

    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ProjectDetail {
    /// Tasks assigned to the given milestone, in `order_index` order.
    pub fn tasks_for_milestone(&self, milestone_id: u64) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.milestone_id == Some(milestone_id))
            .collect();
        tasks.sort_by_key(|task| task.order_index);
        tasks
    }

    /// Tasks that do not belong to any milestone known to this project.
    pub fn unassigned_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| match task.milestone_id {
                Some(id) => !self.milestones.iter().any(|m| m.id == id),
                None => true,
            })
            .collect();
        tasks.sort_by_key(|task| task.order_index);
        tasks
    }
}
