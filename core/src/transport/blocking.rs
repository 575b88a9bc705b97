//! Blocking transport over ureq.

use serde_json::Value;

use super::Transport;
use crate::config::ClientConfig;
use crate::descriptor::OperationDescriptor;
use crate::error::TransportError;
use crate::http::{interpret, HttpMethod, HttpRequest, HttpResponse};
use crate::payload::Payload;

/// Executes dispatched calls with a shared `ureq::Agent`.
///
/// Non-2xx statuses come back as data and are classified by
/// [`interpret`](crate::http::interpret), so the agent is built with
/// `http_status_as_error(false)`.
#[derive(Debug, Clone)]
pub struct BlockingTransport {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl BlockingTransport {
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout()))
            .build()
            .new_agent();
        Self { agent, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn send(
        &self,
        method: HttpMethod,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: Option<&Payload>,
    ) -> Result<Value, TransportError> {
        let request = HttpRequest::new(&self.config, method, path, payload);
        tracing::debug!(
            operation = descriptor.id(),
            tags = ?descriptor.tags(),
            %method,
            path,
            "sending request"
        );
        let response = self.execute(request)?;
        tracing::debug!(operation = descriptor.id(), status = response.status, "received response");
        interpret(response)
    }

    /// Perform the HTTP round-trip for `request`.
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let headers = &request.headers;
        let mut response = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url), headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(url), headers).send_empty(),
        }
        .map_err(map_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(map_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Transport for BlockingTransport {
    fn get(&self, descriptor: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
        self.send(HttpMethod::Get, descriptor, path, None)
    }

    fn post(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        self.send(HttpMethod::Post, descriptor, path, Some(payload))
    }

    fn put(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        self.send(HttpMethod::Put, descriptor, path, Some(payload))
    }

    fn delete(&self, descriptor: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
        self.send(HttpMethod::Delete, descriptor, path, None)
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}

fn map_error(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        e => TransportError::Io(Box::new(e)),
    }
}
