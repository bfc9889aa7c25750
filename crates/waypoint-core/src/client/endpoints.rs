//! Convenience methods, one per backend operation.
//!
//! Each method is a thin wrapper over [`ApiClient::call`]. Use
//! [`ApiClient::call_with`] with the matching [`crate::api_requests`] type
//! when a call needs extra headers or a cancellation token.

use super::ApiClient;
use crate::{
    api_requests::{
        ApplyPlan, CreateProject, CreateTask, DeleteProject, DeleteTask, GenerateDraftPlan,
        GeneratePlan, GetProject, HealthCheck, ListProjects, ReviseDraftPlan, RevisePlan,
        UpdateTask,
    },
    error::Result,
    models::{
        Ack, Health, Plan, PlanApplyInput, PlanGenerateInput, Project, ProjectCreate,
        ProjectDetail, RevisePlanInput, Task, TaskCreate, TaskUpdate,
    },
};

impl ApiClient {
    /// Lists all projects, newest first.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.call(ListProjects).await
    }

    pub async fn create_project(&self, payload: &ProjectCreate) -> Result<Project> {
        self.call(CreateProject(payload.clone())).await
    }

    /// Fetches a project with its milestones and tasks.
    pub async fn get_project(&self, project_id: u64) -> Result<ProjectDetail> {
        self.call(GetProject { id: project_id }).await
    }

    pub async fn delete_project(&self, project_id: u64) -> Result<Ack> {
        self.call(DeleteProject { id: project_id }).await
    }

    pub async fn create_task(&self, payload: &TaskCreate) -> Result<Task> {
        self.call(CreateTask(payload.clone())).await
    }

    /// Applies a partial update; fields left unset in `patch` are untouched.
    pub async fn update_task(&self, task_id: u64, patch: &TaskUpdate) -> Result<Task> {
        self.call(UpdateTask {
            id: task_id,
            patch: patch.clone(),
        })
        .await
    }

    pub async fn delete_task(&self, task_id: u64) -> Result<Ack> {
        self.call(DeleteTask { id: task_id }).await
    }

    /// Asks the planner for a plan (or clarifying questions) for a project.
    pub async fn generate_plan(&self, project_id: u64, input: &PlanGenerateInput) -> Result<Plan> {
        self.call(GeneratePlan {
            project_id,
            input: input.clone(),
        })
        .await
    }

    pub async fn revise_plan(&self, project_id: u64, input: &RevisePlanInput) -> Result<Plan> {
        self.call(RevisePlan {
            project_id,
            input: input.clone(),
        })
        .await
    }

    /// Persists a confirmed proposal and returns the updated project.
    pub async fn apply_plan(
        &self,
        project_id: u64,
        input: &PlanApplyInput,
    ) -> Result<ProjectDetail> {
        self.call(ApplyPlan {
            project_id,
            input: input.clone(),
        })
        .await
    }

    /// Generates a plan before any project exists.
    pub async fn generate_draft_plan(&self, input: &PlanGenerateInput) -> Result<Plan> {
        self.call(GenerateDraftPlan(input.clone())).await
    }

    pub async fn revise_draft_plan(&self, input: &RevisePlanInput) -> Result<Plan> {
        self.call(ReviseDraftPlan(input.clone())).await
    }

    pub async fn health(&self) -> Result<Health> {
        self.call(HealthCheck).await
    }
}
