use reqwest::Method;
use serde_json::Value;

use super::ApiRequest;
use crate::models::{Ack, Project, ProjectCreate, ProjectDetail};

/// `GET /projects`
#[derive(Debug, Clone, Copy, Default)]
pub struct ListProjects;

impl ApiRequest for ListProjects {
    type Response = Vec<Project>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/projects".to_string()
    }
}

/// `POST /projects`
#[derive(Debug, Clone)]
pub struct CreateProject(pub ProjectCreate);

impl ApiRequest for CreateProject {
    type Response = Project;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/projects".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        serde_json::to_value(&self.0).map(Some)
    }
}

/// `GET /projects/{id}`
#[derive(Debug, Clone, Copy)]
pub struct GetProject {
    pub id: u64,
}

impl ApiRequest for GetProject {
    type Response = ProjectDetail;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

/// `DELETE /projects/{id}`
#[derive(Debug, Clone, Copy)]
pub struct DeleteProject {
    pub id: u64,
}

impl ApiRequest for DeleteProject {
    type Response = Ack;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}
