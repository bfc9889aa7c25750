//! One request type per backend endpoint.
//!
//! Each type describes its method, path and optional JSON body through
//! [`ApiRequest`]; [`crate::client::ApiClient::call`] sends it through the
//! shared request helper so error handling is identical for every endpoint,
//! deletes included.

mod health;
mod plans;
mod projects;
mod tasks;

pub use health::HealthCheck;
pub use plans::{ApplyPlan, GenerateDraftPlan, GeneratePlan, ReviseDraftPlan, RevisePlan};
pub use projects::{CreateProject, DeleteProject, GetProject, ListProjects};
pub use tasks::{CreateTask, DeleteTask, UpdateTask};

use reqwest::Method;
use serde_json::Value;

use crate::client::ApiResponse;

/// Definition of an API request
pub trait ApiRequest: Send + Sync {
    /// Has a response type
    type Response: ApiResponse;

    /// HTTP method of the request
    fn method(&self) -> Method;

    /// Path relative to the client's base URL
    fn path(&self) -> String;

    /// JSON body, if the request carries one
    fn body(&self) -> serde_json::Result<Option<Value>> {
        Ok(None)
    }
}
