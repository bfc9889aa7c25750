//! Builder for creating and configuring ApiClient instances.

use std::env;

use log::debug;
use reqwest::{header::HeaderMap, Client, Url};

use super::{options::parse_header, ApiClient};
use crate::error::{Result, WaypointError};

/// Base URL used when neither the builder nor the environment names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted for the base URL.
pub const BASE_URL_ENV: &str = "WAYPOINT_API_URL";

/// Builder for creating and configuring ApiClient instances.
#[derive(Debug, Clone, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    headers: Vec<(String, String)>,
}

impl ApiClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL.
    ///
    /// If not specified, uses `$WAYPOINT_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn with_base_url<S: AsRef<str>>(mut self, base_url: Option<S>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.as_ref().to_string());
        }
        self
    }

    /// Adds a header sent with every request (e.g. an authorization token).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidUrl` if the base URL does not parse
    /// Returns `WaypointError::Configuration` if it is not an http(s) URL
    /// Returns `WaypointError::InvalidHeader` for a malformed default header
    pub fn build(self) -> Result<ApiClient> {
        let raw = match self.base_url {
            Some(url) => url,
            None => Self::default_base_url(),
        };
        let base_url = Self::normalize_base_url(&raw)?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let (name, value) = parse_header(name, value)?;
            default_headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| WaypointError::configuration(format!("HTTP client setup failed: {e}")))?;

        debug!("API client targeting {base_url}");
        Ok(ApiClient::new(base_url, client))
    }

    /// Returns the base URL from the environment, or the local default.
    fn default_base_url() -> String {
        env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Parses the base URL and guarantees a trailing slash so that joined
    /// paths keep any prefix (`http://host/api` + `projects` ->
    /// `http://host/api/projects`).
    fn normalize_base_url(raw: &str) -> Result<Url> {
        let mut url = Url::parse(raw.trim()).map_err(|source| WaypointError::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(WaypointError::configuration(format!(
                "base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}
