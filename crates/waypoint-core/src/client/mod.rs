//! HTTP client for the Waypoint planning backend.
//!
//! [`ApiClient::request`] is the single request path: every endpoint,
//! including deletes, goes through it so that header handling, error
//! normalization and cancellation behave identically.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  api_requests   │    │    ApiClient    │    │     Backend     │
//! │ (ApiRequest     │───▶│ (request helper,│───▶│   (HTTP+JSON)   │
//! │  impls)         │    │  error mapping) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Error Normalization
//!
//! A non-success status becomes [`WaypointError::Api`] carrying the status
//! code, a message of the form `API error {status}: {detail}` (or just
//! `API error {status}`), and the raw detail. A body that cannot be read or
//! parsed simply means there is no detail. Requests are never retried.
//!
//! # Cancellation
//!
//! A [`CancellationToken`] passed through [`RequestOptions`] aborts the
//! in-flight request and fails the call with [`WaypointError::Cancelled`].
//! The client enforces no timeout of its own.

mod builder;
mod detail;
mod endpoints;
mod options;
mod response;

pub use builder::{ApiClientBuilder, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use options::RequestOptions;
pub use response::ApiResponse;
pub use reqwest::Method;

use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, StatusCode, Url,
};
use tokio_util::sync::CancellationToken;

use crate::{
    api_requests::ApiRequest,
    error::{Result, WaypointError},
};

/// ApiClient for interacting with the planning backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    pub(crate) fn new(base_url: Url, client: Client) -> Self {
        Self { base_url, client }
    }

    /// Base URL every path is joined onto (always ends in `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send an [`ApiRequest`] and decode its response.
    pub async fn call<R: ApiRequest>(&self, request: R) -> Result<R::Response> {
        self.call_with(request, RequestOptions::default()).await
    }

    /// Send an [`ApiRequest`] with per-call options (headers, cancellation).
    ///
    /// The request's own body replaces any body set on `options`.
    pub async fn call_with<R: ApiRequest>(
        &self,
        request: R,
        mut options: RequestOptions,
    ) -> Result<R::Response> {
        options.body = request.body()?;
        self.request(request.method(), &request.path(), options)
            .await
    }

    /// Perform one HTTP call against `path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// * `WaypointError::Api` - non-success status, with detail if available
    /// * `WaypointError::Cancelled` - the options' token fired first
    /// * `WaypointError::Transport` - connection or transfer failure
    /// * `WaypointError::Serialization` - success body did not match `T`
    /// * `WaypointError::EmptyResponse` - 204 for a `T` with no empty value
    pub async fn request<T: ApiResponse>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let url = self.endpoint(path)?;

        let Some(token) = options.cancel.clone() else {
            return self.exchange(method, url, options).await;
        };

        if token.is_cancelled() {
            warn!("{method} {url} cancelled before sending");
            return Err(WaypointError::Cancelled);
        }

        Self::until_cancelled(&token, self.exchange(method.clone(), url.clone(), options))
            .await
            .unwrap_or_else(|| {
                warn!("{method} {url} cancelled");
                Err(WaypointError::Cancelled)
            })
    }

    /// Resolves a request path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| WaypointError::InvalidUrl {
                url: path.to_string(),
                source,
            })
    }

    /// Runs `future` unless `token` fires first; dropping the future aborts
    /// the underlying connection.
    async fn until_cancelled<F: std::future::Future>(
        token: &CancellationToken,
        future: F,
    ) -> Option<F::Output> {
        tokio::select! {
            biased;
            () = token.cancelled() => None,
            output = future => Some(output),
        }
    }

    async fn exchange<T: ApiResponse>(
        &self,
        method: Method,
        url: Url,
        options: RequestOptions,
    ) -> Result<T> {
        let mut headers = HeaderMap::new();
        if options.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        // Caller headers land last and replace same-named entries
        headers.extend(options.headers);

        debug!("{method} {url}");
        let mut builder = self.client.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = match response.bytes().await {
                Ok(body) => detail::extract_detail(&body),
                Err(e) => {
                    debug!("Could not read error body from {url}: {e}");
                    None
                }
            };
            warn!("{method} {url} failed with {status}");
            return Err(WaypointError::api(status.as_u16()).with_detail(detail));
        }

        // Whatever a no-content response carries is left unread
        if is_no_content(status) {
            debug!("{method} {url} returned {status} without body");
            return decode_body(status, &[]);
        }

        let body = response.bytes().await?;
        decode_body(status, &body)
    }
}

fn is_no_content(status: StatusCode) -> bool {
    status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT
}

/// Decodes a success body; 204 and 205 yield the type's empty value without
/// looking at `body`.
fn decode_body<T: ApiResponse>(status: StatusCode, body: &[u8]) -> Result<T> {
    if is_no_content(status) {
        return T::no_content().ok_or(WaypointError::EmptyResponse {
            status: status.as_u16(),
        });
    }
    Ok(serde_json::from_slice(body)?)
}
