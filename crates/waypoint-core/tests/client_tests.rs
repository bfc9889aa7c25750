//! Request helper behaviour: error normalization, empty responses, headers
//! and cancellation.

mod common;

use std::time::{Duration, Instant};

use axum::http::Method;
use common::{project_json, MockServer};
use serde_json::json;
use tokio::net::TcpListener;
use waypoint_core::{
    api_requests::{DeleteProject, GetProject, UpdateTask},
    ApiClientBuilder, CancellationToken, RequestOptions, TaskStatus, TaskUpdate, WaypointError,
};

#[tokio::test]
async fn test_error_detail_is_embedded_in_message() {
    let server = MockServer::start().await;
    server.json(
        Method::GET,
        "/projects/99",
        404,
        json!({"detail": "Project not found"}),
    );

    let err = server.client().get_project(99).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("Project not found"));
    assert!(err.to_string().contains("Project not found"));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_status() {
    let server = MockServer::start().await;
    server.raw(Method::GET, "/projects", 502, "<html>Bad Gateway</html>");

    let err = server.client().list_projects().await.unwrap_err();

    match err {
        WaypointError::Api {
            status,
            message,
            detail,
        } => {
            assert_eq!(status, 502);
            assert_eq!(message, "API error 502");
            assert_eq!(detail, None);
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status() {
    let server = MockServer::start().await;
    server.raw(Method::DELETE, "/tasks/5", 500, "");

    let err = server.client().delete_task(5).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "API error 500");
}

#[tokio::test]
async fn test_validation_error_detail_is_flattened() {
    let server = MockServer::start().await;
    server.json(
        Method::PATCH,
        "/tasks/1",
        422,
        json!({"detail": [{"loc": ["body", "title"], "msg": "String should have at least 1 character"}]}),
    );

    let err = server
        .client()
        .update_task(1, &TaskUpdate::default().with_title(""))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(
        err.detail(),
        Some("body.title: String should have at least 1 character")
    );
}

// The server strips 204 bodies before they reach the client; the unread-body
// rule itself is covered by the decode tests in `client`.
#[tokio::test]
async fn test_no_content_returns_empty_value() {
    let server = MockServer::start().await;
    server.raw(Method::DELETE, "/projects/3", 204, "{not json");

    let ack = server.client().delete_project(3).await.unwrap();

    assert!(ack.ok);
    assert_eq!(server.last_request().method, Method::DELETE);
}

#[tokio::test]
async fn test_reset_content_body_is_not_parsed() {
    let server = MockServer::start().await;
    server.raw(Method::DELETE, "/tasks/3", 205, "{not json");

    let ack = server.client().delete_task(3).await.unwrap();

    assert!(ack.ok);
}

#[tokio::test]
async fn test_no_content_for_typed_response_is_reported() {
    let server = MockServer::start().await;
    server.raw(Method::GET, "/projects/3", 204, "");

    let err = server.client().get_project(3).await.unwrap_err();

    assert!(matches!(err, WaypointError::EmptyResponse { status: 204 }));
}

#[tokio::test]
async fn test_raw_request_with_unit_response_accepts_no_content() {
    let server = MockServer::start().await;
    server.raw(Method::POST, "/projects/3/archive", 204, "");

    let client = server.client();
    let () = client
        .request(Method::POST, "/projects/3/archive", RequestOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_success_body_with_wrong_shape_is_a_serialization_error() {
    let server = MockServer::start().await;
    server.json(Method::GET, "/projects", 200, json!({"projects": []}));

    let err = server.client().list_projects().await.unwrap_err();

    assert!(matches!(err, WaypointError::Serialization { .. }));
}

#[tokio::test]
async fn test_json_content_type_only_with_body() {
    let server = MockServer::start().await;
    server.json(Method::GET, "/projects", 200, json!([]));
    server.json(
        Method::PATCH,
        "/tasks/2",
        200,
        common::task_json(2, "done"),
    );

    let client = server.client();
    client.list_projects().await.unwrap();
    client
        .update_task(2, &TaskUpdate::default().with_status(TaskStatus::Done))
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].headers.get("content-type").is_none());
    assert_eq!(requests[1].headers["content-type"], "application/json");
}

#[tokio::test]
async fn test_caller_headers_override_content_type() {
    let server = MockServer::start().await;
    server.json(Method::PATCH, "/tasks/2", 200, common::task_json(2, "done"));

    let options = RequestOptions::new()
        .with_header("Content-Type", "application/merge-patch+json")
        .unwrap()
        .with_header("X-Request-Id", "req-1")
        .unwrap();
    let task = server
        .client()
        .call_with(
            UpdateTask {
                id: 2,
                patch: TaskUpdate::default().with_status(TaskStatus::Done),
            },
            options,
        )
        .await
        .unwrap();

    assert_eq!(task.status, TaskStatus::Done);
    let request = server.last_request();
    assert_eq!(
        request.headers["content-type"],
        "application/merge-patch+json"
    );
    assert_eq!(request.headers["x-request-id"], "req-1");
    assert_eq!(request.json(), json!({"status": "done"}));
}

#[tokio::test]
async fn test_builder_default_headers_are_sent() {
    let server = MockServer::start().await;
    server.json(Method::GET, "/projects", 200, json!([project_json(1, "A")]));

    let client = ApiClientBuilder::new()
        .with_base_url(Some(&server.base_url))
        .with_header("Authorization", "Bearer secret")
        .build()
        .unwrap();
    let projects = client.list_projects().await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(
        server.last_request().headers["authorization"],
        "Bearer secret"
    );
}

#[tokio::test]
async fn test_base_url_prefix_is_kept() {
    let server = MockServer::start().await;
    server.json(Method::GET, "/api/projects", 200, json!([]));

    let client = ApiClientBuilder::new()
        .with_base_url(Some(format!("{}/api", server.base_url)))
        .build()
        .unwrap();
    client.list_projects().await.unwrap();

    assert_eq!(server.last_request().path, "/api/projects");
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_request() {
    let server = MockServer::start().await;
    server.delayed(
        Method::GET,
        "/projects/1",
        Duration::from_secs(10),
        project_json(1, "Slow"),
    );

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let started = Instant::now();
    let err = server
        .client()
        .call_with(
            GetProject { id: 1 },
            RequestOptions::new().with_cancel(token),
        )
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_already_cancelled_token_sends_nothing() {
    let server = MockServer::start().await;
    let token = CancellationToken::new();
    token.cancel();

    let err = server
        .client()
        .call_with(
            DeleteProject { id: 1 },
            RequestOptions::new().with_cancel(token),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, WaypointError::Cancelled));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_uncancelled_token_does_not_interfere() {
    let server = MockServer::start().await;
    server.json(Method::GET, "/projects/1", 200, project_json(1, "Fast"));

    let detail = server
        .client()
        .call_with(
            GetProject { id: 1 },
            RequestOptions::new().with_cancel(CancellationToken::new()),
        )
        .await
        .unwrap();

    assert_eq!(detail.project.title, "Fast");
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClientBuilder::new()
        .with_base_url(Some(format!("http://{addr}")))
        .build()
        .unwrap();
    let err = client.list_projects().await.unwrap_err();

    assert!(matches!(err, WaypointError::Transport { .. }));
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn test_each_call_issues_exactly_one_request() {
    let server = MockServer::start().await;
    server.json(
        Method::GET,
        "/projects",
        503,
        json!({"detail": "Database unavailable"}),
    );

    let client = server.client();
    assert!(client.list_projects().await.is_err());

    assert_eq!(server.requests().len(), 1);
}
