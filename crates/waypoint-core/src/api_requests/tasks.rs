use reqwest::Method;
use serde_json::Value;

use super::ApiRequest;
use crate::models::{Ack, Task, TaskCreate, TaskUpdate};

/// `POST /tasks`
#[derive(Debug, Clone)]
pub struct CreateTask(pub TaskCreate);

impl ApiRequest for CreateTask {
    type Response = Task;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/tasks".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        serde_json::to_value(&self.0).map(Some)
    }
}

/// `PATCH /tasks/{id}`
#[derive(Debug, Clone)]
pub struct UpdateTask {
    pub id: u64,
    pub patch: TaskUpdate,
}

impl ApiRequest for UpdateTask {
    type Response = Task;

    fn method(&self) -> Method {
        Method::PATCH
    }

    fn path(&self) -> String {
        format!("/tasks/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        serde_json::to_value(&self.patch).map(Some)
    }
}

/// `DELETE /tasks/{id}`
#[derive(Debug, Clone, Copy)]
pub struct DeleteTask {
    pub id: u64,
}

impl ApiRequest for DeleteTask {
    type Response = Ack;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/tasks/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{TaskSize, TaskStatus};

    #[test]
    fn test_status_only_patch() {
        let request = UpdateTask {
            id: 3,
            patch: TaskUpdate::default().with_status(TaskStatus::Done),
        };
        assert_eq!(request.path(), "/tasks/3");
        assert_eq!(request.body().unwrap(), Some(json!({"status": "done"})));
    }

    #[test]
    fn test_patch_can_clear_nullable_fields() {
        let patch = TaskUpdate::default()
            .with_milestone(None)
            .with_estimate(Some(TaskSize::L));
        let body = UpdateTask { id: 1, patch }.body().unwrap().unwrap();
        assert_eq!(body, json!({"estimate": "L", "milestone_id": null}));
    }

    #[test]
    fn test_create_task_defaults_to_todo() {
        let request = CreateTask(TaskCreate {
            project_id: 4,
            title: "Read chapter 1".to_string(),
            ..Default::default()
        });
        let body = request.body().unwrap().unwrap();
        assert_eq!(body["status"], "todo");
        assert_eq!(body["project_id"], 4);
        assert!(body["milestone_id"].is_null());
    }
}
