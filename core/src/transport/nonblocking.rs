//! Async transport over reqwest.

use async_trait::async_trait;
use serde_json::Value;

use super::AsyncTransport;
use crate::config::ClientConfig;
use crate::descriptor::OperationDescriptor;
use crate::error::TransportError;
use crate::http::{interpret, HttpMethod, HttpRequest, HttpResponse};
use crate::payload::Payload;

/// Executes dispatched calls with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(map_error)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send(
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
        let response = self.execute(request).await?;
        tracing::debug!(operation = descriptor.id(), status = response.status, "received response");
        interpret(response)
    }

    /// Perform the HTTP round-trip for `request`.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_error)?;
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
        let body = response.text().await.map_err(map_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl AsyncTransport for ReqwestTransport {
    async fn get(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
    ) -> Result<Value, TransportError> {
        self.send(HttpMethod::Get, descriptor, path, None).await
    }

    async fn post(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        self.send(HttpMethod::Post, descriptor, path, Some(payload)).await
    }

    async fn put(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        self.send(HttpMethod::Put, descriptor, path, Some(payload)).await
    }

    async fn delete(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
    ) -> Result<Value, TransportError> {
        self.send(HttpMethod::Delete, descriptor, path, None).await
    }
}

fn map_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Io(Box::new(err))
    }
}
