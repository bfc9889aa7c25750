//! Error types for the Waypoint client.

use thiserror::Error;

/// Comprehensive error type for all client operations.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// The backend answered with a non-success status
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        detail: Option<String>,
    },
    /// The caller's cancellation token fired before the response completed
    #[error("Request cancelled")]
    Cancelled,
    /// Connection, TLS or body transfer failure reported by the transport
    #[error("Transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    /// A body could not be encoded, or a success body did not match the
    /// expected shape
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// The server sent no content for an operation that needs a body
    #[error("Empty response with status {status}")]
    EmptyResponse { status: u16 },
    /// The base URL or a request path could not be parsed
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    /// A header name or value supplied to the builder was rejected
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating normalized API errors.
pub struct ApiErrorBuilder {
    status: u16,
}

impl ApiErrorBuilder {
    /// Create a new API error builder for an HTTP status code.
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    /// Build the error, embedding the detail in the message when present.
    pub fn with_detail(self, detail: Option<String>) -> WaypointError {
        let message = match &detail {
            Some(detail) => format!("API error {}: {detail}", self.status),
            None => format!("API error {}", self.status),
        };
        WaypointError::Api {
            status: self.status,
            message,
            detail,
        }
    }
}

impl WaypointError {
    /// Creates a builder for API errors.
    pub fn api(status: u16) -> ApiErrorBuilder {
        ApiErrorBuilder::new(status)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::EmptyResponse { status } => Some(*status),
            Self::Transport { source } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Server-supplied detail of an API error.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, WaypointError>;
