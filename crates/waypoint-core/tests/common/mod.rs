//! In-process mock of the planning backend for integration tests.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use waypoint_core::{ApiClient, ApiClientBuilder};

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body was not JSON")
    }
}

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    json: bool,
    delay: Option<Duration>,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<(Method, String), Canned>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockServer {
    pub base_url: String,
    state: MockState,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server failed");
        });
        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClientBuilder::new()
            .with_base_url(Some(&self.base_url))
            .build()
            .expect("Failed to build client")
    }

    /// Answer `method path` with a JSON body.
    pub fn json(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.insert(method, path, status, body.to_string(), true, None);
    }

    /// Answer `method path` with an arbitrary, non-JSON body.
    pub fn raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.insert(method, path, status, body.to_string(), false, None);
    }

    /// Answer `method path` with a JSON body after `delay`.
    pub fn delayed(&self, method: Method, path: &str, delay: Duration, body: serde_json::Value) {
        self.insert(method, path, 200, body.to_string(), true, Some(delay));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("No request reached the mock server")
    }

    fn insert(
        &self,
        method: Method,
        path: &str,
        status: u16,
        body: String,
        json: bool,
        delay: Option<Duration>,
    ) {
        let canned = Canned {
            status: StatusCode::from_u16(status).expect("Invalid status"),
            body,
            json,
            delay,
        };
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), canned);
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    let canned = state.routes.lock().unwrap().get(&(method, path)).cloned();
    let Some(canned) = canned else {
        return not_found();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    let mut response = (canned.status, canned.body).into_response();
    let content_type = if canned.json {
        "application/json"
    } else {
        "text/plain; charset=utf-8"
    };
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

fn not_found() -> Response {
    let mut response = (StatusCode::NOT_FOUND, r#"{"detail":"Not Found"}"#).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

pub fn project_json(id: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "goal_text": format!("Finish {title}"),
        "deadline": null,
        "hours_per_week": 5
    })
}

pub fn task_json(id: u64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Task {id}"),
        "description": null,
        "status": status,
        "due_date": null,
        "estimate": "S",
        "order_index": 0,
        "milestone_id": null
    })
}
