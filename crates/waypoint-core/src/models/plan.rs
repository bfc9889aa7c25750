//! Plan model definitions.
//!
//! Plans are produced by the backend's planning assistant and are not stored
//! until applied to a project. Proposed tasks reference their milestone by
//! position in the proposal's milestone list, since neither side has an id
//! yet.

use serde::{Deserialize, Serialize};

use super::{TaskSize, TaskStatus};

/// A milestone proposed by plan generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProposedMilestone {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub order_index: u32,
}

/// A task proposed by plan generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProposedTask {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Index into [`ProposedPlan::milestones`]. The planner may emit
    /// negative or out-of-range values; those tasks count as unassigned.
    #[serde(default)]
    pub milestone_index: Option<i64>,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub estimate: Option<TaskSize>,

    #[serde(default)]
    pub order_index: u32,
}

impl ProposedTask {
    /// The milestone index as a list position, if it can be one.
    pub fn milestone_position(&self) -> Option<usize> {
        self.milestone_index
            .and_then(|index| usize::try_from(index).ok())
    }
}

/// Milestones and tasks making up a proposed plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProposedPlan {
    #[serde(default)]
    pub milestones: Vec<ProposedMilestone>,

    #[serde(default)]
    pub tasks: Vec<ProposedTask>,
}

impl ProposedPlan {
    /// Tasks proposed for the milestone at `index`, in `order_index` order.
    pub fn tasks_for_milestone(&self, index: usize) -> Vec<&ProposedTask> {
        let mut tasks: Vec<&ProposedTask> = self
            .tasks
            .iter()
            .filter(|task| task.milestone_position() == Some(index))
            .collect();
        tasks.sort_by_key(|task| task.order_index);
        tasks
    }

    /// Tasks whose `milestone_index` is missing or out of range.
    pub fn unassigned_tasks(&self) -> Vec<&ProposedTask> {
        self.tasks
            .iter()
            .filter(|task| {
                task.milestone_position()
                    .map_or(true, |index| index >= self.milestones.len())
            })
            .collect()
    }
}

/// A clarifying question the planner needs answered before proposing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanQuestion {
    pub id: String,

    /// Input field the answer is meant to fill (e.g. `deadline`)
    pub field: String,

    pub question: String,
}

/// Result of generating or revising a plan, discriminated on `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Plan {
    /// More input is needed before a plan can be proposed
    Questions { questions: Vec<PlanQuestion> },

    /// A proposed plan ready for review
    #[serde(rename = "plan")]
    Proposal(ProposedPlan),
}

impl Plan {
    /// The wire tag of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Plan::Questions { .. } => "questions",
            Plan::Proposal(_) => "plan",
        }
    }

    /// Returns the proposal, or `None` when the planner asked questions.
    pub fn into_proposal(self) -> Option<ProposedPlan> {
        match self {
            Plan::Proposal(plan) => Some(plan),
            Plan::Questions { .. } => None,
        }
    }

    /// Questions asked by the planner; empty for a proposal.
    pub fn questions(&self) -> &[PlanQuestion] {
        match self {
            Plan::Questions { questions } => questions,
            Plan::Proposal(_) => &[],
        }
    }
}
