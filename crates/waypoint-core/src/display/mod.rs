//! Display formatting for models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as list formatting or a confirmation
//! line in front of a created resource.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │ (Project, Task, │───▶│ (Projects,      │───▶│    Output       │
//! │  Plan)          │    │  CreateResult)  │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Projects, Tasks)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Projects, Tasks};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
