//! Error types for the Dashboard API client.
//!
//! # Design
//! `ApiError` separates failures detected locally, before any I/O, from
//! failures reported by the transport. `MalformedRequest` is raised when the
//! call's arguments do not fit the operation descriptor and is never retried.
//! Transport failures travel through `ApiError::Transport` unchanged, so the
//! caller sees exactly what the transport produced.

use std::time::Duration;

/// A transport library's own error, kept as the `source` of an `Io` failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

use serde_json::Value;

/// Errors returned by the dispatcher and the typed operation wrappers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The call's arguments do not match the operation descriptor.
    #[error("malformed request for {operation}: {reason}")]
    MalformedRequest {
        operation: &'static str,
        reason: String,
    },

    /// No descriptor with this operation id is registered.
    #[error("unknown operation {0}")]
    UnknownOperation(String),

    /// The body arguments could not be serialized.
    #[error("serialization failed")]
    Serialization(#[source] serde_json::Error),

    /// The body arguments serialized to something other than a JSON object.
    #[error("body arguments must be a JSON object, got {kind}")]
    BodyNotObject { kind: &'static str },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    pub(crate) fn malformed(operation: &'static str, reason: impl Into<String>) -> Self {
        ApiError::MalformedRequest {
            operation,
            reason: reason.into(),
        }
    }
}

/// Errors raised by a transport while executing a request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 429.
    #[error("rate limited (retry after {retry_after:?})")]
    RateLimited { retry_after: Option<Duration> },

    /// The server returned a 4xx status other than 404 and 429.
    #[error("HTTP {status}: {errors:?}")]
    Client { status: u16, errors: Vec<String> },

    /// The server returned a 5xx status.
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The server returned a 1xx or 3xx status, which the API never sends.
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection-level failure.
    #[error("I/O error")]
    Io(#[source] BoxError),

    /// The response body is not valid JSON.
    #[error("deserialization failed")]
    Deserialization(#[source] serde_json::Error),
}

impl TransportError {
    /// Pull the Dashboard API's `{"errors": [...]}` messages out of a 4xx
    /// body, falling back to the raw body.
    pub(crate) fn client(status: u16, body: &str) -> Self {
        let errors = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| match v.get("errors") {
                Some(Value::Array(items)) => Some(
                    items
                        .iter()
                        .map(|e| match e {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect(),
                ),
                _ => None,
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    Vec::new()
                } else {
                    vec![body.to_string()]
                }
            });
        TransportError::Client { status, errors }
    }
}

/// Errors raised while building a `ClientConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no API key: set {0}")]
    MissingApiKey(&'static str),

    #[error("invalid base URL {0:?}: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be built from the configuration.
    #[error("could not build HTTP client")]
    HttpClient(#[from] TransportError),
}
