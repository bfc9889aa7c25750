use reqwest::Method;

use super::ApiRequest;
use crate::models::Health;

/// `GET /health`
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthCheck;

impl ApiRequest for HealthCheck {
    type Response = Health;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/health".to_string()
    }
}
