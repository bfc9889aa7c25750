//! Per-call request options.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::{Result, WaypointError};

/// Options for a single call through the request helper.
///
/// ```rust
/// use waypoint_core::{CancellationToken, RequestOptions};
///
/// let token = CancellationToken::new();
/// let options = RequestOptions::new()
///     .with_header("x-request-id", "abc123")?
///     .with_cancel(token.clone());
/// assert!(options.cancel.is_some());
/// # Ok::<(), waypoint_core::WaypointError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// JSON body; when present `Content-Type: application/json` is set
    /// before [`Self::headers`] are merged
    pub body: Option<Value>,

    /// Extra headers, applied last so they may override the content type
    pub headers: HeaderMap,

    /// Aborts the call with [`WaypointError::Cancelled`] when fired
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header, replacing any earlier value with the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

pub(crate) fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| WaypointError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| WaypointError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok((header_name, header_value))
}
