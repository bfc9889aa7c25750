//! Request payloads sent to the backend.
//!
//! Create payloads serialize every field, sending `null` for absent optionals.
//! [`TaskUpdate`] is a partial patch: fields left as `None` are not serialized
//! at all, so the server leaves them unchanged.

use serde::{Serialize, Serializer};

use super::{
    DetailLevel, ExperienceLevel, ProposedMilestone, ProposedPlan, ProposedTask, TaskSize,
    TaskStatus,
};

/// Payload for `POST /projects`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProjectCreate {
    pub title: String,
    pub goal_text: String,
    pub deadline: Option<String>,
    pub hours_per_week: Option<u32>,
}

/// Payload for `POST /tasks`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TaskCreate {
    pub project_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<String>,
    pub estimate: Option<TaskSize>,
    /// Insert position; the server shifts siblings at or after it
    pub order_index: Option<u32>,
    pub milestone_id: Option<u64>,
}

/// Partial update for `PATCH /tasks/{id}`.
///
/// Nullable fields use a nested option: `Some(None)` clears the stored value
/// by sending `null`, while `None` omits the field entirely.
///
/// ```rust
/// use waypoint_core::models::{TaskStatus, TaskUpdate};
///
/// let patch = TaskUpdate::default().with_status(TaskStatus::Done);
/// let body = serde_json::to_string(&patch).unwrap();
/// assert_eq!(body, r#"{"status":"done"}"#);
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Option<TaskSize>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<Option<u64>>,
}

impl TaskUpdate {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_due_date(mut self, due_date: Option<String>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_estimate(mut self, estimate: Option<TaskSize>) -> Self {
        self.estimate = Some(estimate);
        self
    }

    pub fn with_order_index(mut self, order_index: u32) -> Self {
        self.order_index = Some(order_index);
        self
    }

    pub fn with_milestone(mut self, milestone_id: Option<u64>) -> Self {
        self.milestone_id = Some(milestone_id);
        self
    }

    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Inputs for generating a plan, with or without a project.
///
/// Absent optionals are omitted so the server's defaults apply.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PlanGenerateInput {
    pub goal_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_level: Option<DetailLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
}

/// Inputs for revising a previously proposed plan.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RevisePlanInput {
    #[serde(flatten)]
    pub input: PlanGenerateInput,

    /// The plan being revised, sent back tagged as `"type": "plan"`
    #[serde(serialize_with = "serialize_tagged_plan")]
    pub current_plan: ProposedPlan,

    /// What the user wants changed
    pub adjustment: String,
}

/// Payload for `POST /projects/{id}/plan/apply`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PlanApplyInput {
    pub milestones: Vec<ProposedMilestone>,
    pub tasks: Vec<ProposedTask>,
}

impl From<ProposedPlan> for PlanApplyInput {
    fn from(plan: ProposedPlan) -> Self {
        Self {
            milestones: plan.milestones,
            tasks: plan.tasks,
        }
    }
}

fn serialize_tagged_plan<S: Serializer>(
    plan: &ProposedPlan,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    #[serde(tag = "type", rename = "plan")]
    struct Tagged<'a> {
        milestones: &'a [ProposedMilestone],
        tasks: &'a [ProposedTask],
    }

    Tagged {
        milestones: &plan.milestones,
        tasks: &plan.tasks,
    }
    .serialize(serializer)
}
