//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! concrete transports turn a dispatched call into an `HttpRequest`, hand it
//! to their HTTP library, and convert whatever comes back into an
//! `HttpResponse` before `interpret` maps it to a JSON value or a
//! `TransportError`. Keeping the status mapping here means both transports
//! classify failures identically.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::payload::Payload;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON payload.
    pub const fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Build the request for a resolved resource path against `config`.
    pub fn new(
        config: &ClientConfig,
        method: HttpMethod,
        path: &str,
        payload: Option<&Payload>,
    ) -> Self {
        let mut headers = vec![
            (
                "authorization".to_string(),
                format!("Bearer {}", config.api_key()),
            ),
            ("user-agent".to_string(), config.user_agent().to_string()),
            ("accept".to_string(), "application/json".to_string()),
        ];
        let body = payload.map(|p| {
            headers.push(("content-type".to_string(), "application/json".to_string()));
            p.to_json_string()
        });
        Self {
            method,
            url: format!("{}{path}", config.base_url()),
            headers,
            body,
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Map a response to its JSON body, or to the `TransportError` matching its
/// status class.
pub fn interpret(response: HttpResponse) -> Result<Value, TransportError> {
    match response.status {
        200..=299 => {
            if response.body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&response.body)
                .map_err(TransportError::Deserialization)
        }
        404 => Err(TransportError::NotFound),
        429 => Err(TransportError::RateLimited {
            retry_after: response
                .header("retry-after")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs),
        }),
        status @ 400..=499 => Err(TransportError::client(status, &response.body)),
        status @ 500..=599 => Err(TransportError::Server {
            status,
            body: response.body,
        }),
        status => Err(TransportError::UnexpectedStatus {
            status,
            body: response.body,
        }),
    }
}
