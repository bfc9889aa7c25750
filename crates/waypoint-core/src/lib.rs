//! Core library for the Waypoint planning client.
//!
//! This crate provides a typed HTTP client for the Waypoint planning backend:
//! projects, milestones and tasks, plus AI-generated plans that are reviewed
//! and then applied to a project. Every operation is a single HTTP request
//! with a JSON body; the backend owns persistence, validation and id
//! assignment.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use waypoint_core::{models::ProjectCreate, ApiClientBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClientBuilder::new()
//!     .with_base_url(Some("http://localhost:8000"))
//!     .build()?;
//!
//! let project = client
//!     .create_project(&ProjectCreate {
//!         title: "Learn X".to_string(),
//!         goal_text: "Build something real with X".to_string(),
//!         deadline: None,
//!         hours_per_week: Some(5),
//!     })
//!     .await?;
//!
//! let detail = client.get_project(project.id).await?;
//! println!("{detail}");
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Non-success responses surface as [`WaypointError::Api`] with the status
//! code, a readable message and the server's `detail` when it sent one:
//!
//! ```rust,no_run
//! # use waypoint_core::{ApiClientBuilder, WaypointError};
//! # async fn example() -> waypoint_core::Result<()> {
//! # let client = ApiClientBuilder::new().build()?;
//! match client.get_project(999).await {
//!     Err(err) if err.is_not_found() => println!("{err}"),
//!     other => println!("{:?}", other?),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api_requests;
pub mod client;
pub mod display;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use api_requests::ApiRequest;
pub use client::{ApiClient, ApiClientBuilder, ApiResponse, RequestOptions};
pub use display::{CreateResult, DeleteResult, OperationStatus, Projects, Tasks, UpdateResult};
pub use error::{Result, WaypointError};
pub use models::{
    Ack, Plan, PlanApplyInput, PlanGenerateInput, Project, ProjectCreate, ProjectDetail,
    ProposedPlan, RevisePlanInput, Task, TaskCreate, TaskSize, TaskStatus, TaskUpdate,
};
pub use tokio_util::sync::CancellationToken;
