//! Data-transfer shapes exchanged with the planning backend.
//!
//! Every type here is an immutable snapshot. Responses derive `Deserialize`
//! and are never mutated in place by the client; callers request a fresh
//! snapshot instead. Request payloads live in [`requests`] and only need to
//! serialize.
//!
//! Display implementations for these models are located in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{Plan, TaskStatus};
//!
//! let body = r#"{"type": "questions", "questions": [
//!     {"id": "q1", "field": "deadline", "question": "What is your target deadline?"}
//! ]}"#;
//! let plan: Plan = serde_json::from_str(body).unwrap();
//! assert_eq!(plan.kind(), "questions");
//! assert_eq!(plan.questions()[0].field, "deadline");
//!
//! assert!("in progress".parse::<TaskStatus>().is_err());
//! ```

pub mod milestone;
pub mod plan;
pub mod project;
pub mod requests;
pub mod responses;
pub mod status;
pub mod task;


pub use milestone::Milestone;
pub use plan::{Plan, PlanQuestion, ProposedMilestone, ProposedPlan, ProposedTask};
pub use project::{Project, ProjectDetail};
pub use requests::{
    PlanApplyInput, PlanGenerateInput, ProjectCreate, RevisePlanInput, TaskCreate, TaskUpdate,
};
pub use responses::{Ack, Health};
pub use status::{DetailLevel, ExperienceLevel, TaskSize, TaskStatus};
pub use task::Task;
