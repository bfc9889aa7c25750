//! Response decoding contract.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{Ack, Health, Plan, Project, ProjectDetail, Task};

/// A type the request helper can produce from a success response.
///
/// `no_content` is the value returned for `204 No Content` (and
/// `205 Reset Content`) without reading the body. Types that have no
/// meaningful empty value return `None`, which surfaces as
/// [`crate::WaypointError::EmptyResponse`].
pub trait ApiResponse: DeserializeOwned {
    fn no_content() -> Option<Self> {
        None
    }
}

impl ApiResponse for Ack {
    fn no_content() -> Option<Self> {
        Some(Ack { ok: true })
    }
}

impl ApiResponse for () {
    fn no_content() -> Option<Self> {
        Some(())
    }
}

impl ApiResponse for Value {
    fn no_content() -> Option<Self> {
        Some(Value::Null)
    }
}

impl<T: DeserializeOwned> ApiResponse for Option<T> {
    fn no_content() -> Option<Self> {
        Some(None)
    }
}

impl<T: DeserializeOwned> ApiResponse for Vec<T> {}

impl ApiResponse for Project {}
impl ApiResponse for ProjectDetail {}
impl ApiResponse for Task {}
impl ApiResponse for Plan {}
impl ApiResponse for Health {}
