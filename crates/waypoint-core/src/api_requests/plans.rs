use reqwest::Method;
use serde_json::Value;

use super::ApiRequest;
use crate::models::{Plan, PlanApplyInput, PlanGenerateInput, ProjectDetail, RevisePlanInput};

/// `POST /projects/{id}/plan/generate`
#[derive(Debug, Clone)]
pub struct GeneratePlan {
    pub project_id: u64,
    pub input: PlanGenerateInput,
}

impl ApiRequest for GeneratePlan {
    type Response = Plan;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/projects/{}/plan/generate", self.project_id)
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        serde_json::to_value(&self.input).map(Some)
    }
}

/// `POST /projects/{id}/plan/revise`
#[derive(Debug, Clone)]
pub struct RevisePlan {
    pub project_id: u64,
    pub input: RevisePlanInput,
}

impl ApiRequest for RevisePlan {
    type Response = Plan;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/projects/{}/plan/revise", self.project_id)
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        serde_json::to_value(&self.input).map(Some)
    }
}

/// `POST /projects/{id}/plan/apply`
#[derive(Debug, Clone)]
pub struct ApplyPlan {
    pub project_id: u64,
    pub input: PlanApplyInput,
}

impl ApiRequest for ApplyPlan {
    type Response = ProjectDetail;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/projects/{}/plan/apply", self.project_id)
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        serde_json::to_value(&self.input).map(Some)
    }
}

/// `POST /plan/generate`, for a project that does not exist yet
#[derive(Debug, Clone)]
pub struct GenerateDraftPlan(pub PlanGenerateInput);

impl ApiRequest for GenerateDraftPlan {
    type Response = Plan;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/plan/generate".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        serde_json::to_value(&self.0).map(Some)
    }
}

/// `POST /plan/revise`
#[derive(Debug, Clone)]
pub struct ReviseDraftPlan(pub RevisePlanInput);

impl ApiRequest for ReviseDraftPlan {
    type Response = Plan;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/plan/revise".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        serde_json::to_value(&self.0).map(Some)
    }
}
