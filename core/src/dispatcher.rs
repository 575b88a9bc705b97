//! The endpoint dispatcher.
//!
//! # Design
//! Every REST operation goes through the same two steps. `prepare` turns a
//! descriptor plus call arguments into a `PreparedCall` without touching
//! the network: it resolves the path, filters the payload and checks
//! required fields. Sending hands the prepared call to a transport, once.
//! A `Dispatcher` owns nothing but its transport, so one instance can serve
//! any number of concurrent calls.

use serde_json::Value;

use crate::api::catalog;
use crate::descriptor::OperationDescriptor;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::path;
use crate::payload::{BodyArgs, Payload};
use crate::transport::{AsyncTransport, Transport};

/// A call whose path and payload are fixed, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCall<'d> {
    descriptor: &'d OperationDescriptor,
    path: String,
    payload: Payload,
}

impl<'d> PreparedCall<'d> {
    pub fn descriptor(&self) -> &'d OperationDescriptor {
        self.descriptor
    }

    pub fn method(&self) -> HttpMethod {
        self.descriptor.method()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The request body, or `None` for GET and DELETE.
    pub fn payload(&self) -> Option<&Payload> {
        self.descriptor.method().has_body().then_some(&self.payload)
    }

    pub fn send<T: Transport + ?Sized>(&self, transport: &T) -> Result<Value, ApiError> {
        let d = self.descriptor;
        let response = match d.method() {
            HttpMethod::Get => transport.get(d, &self.path),
            HttpMethod::Post => transport.post(d, &self.path, &self.payload),
            HttpMethod::Put => transport.put(d, &self.path, &self.payload),
            HttpMethod::Delete => transport.delete(d, &self.path),
        }?;
        Ok(response)
    }

    pub async fn send_async<T: AsyncTransport + ?Sized>(
        &self,
        transport: &T,
    ) -> Result<Value, ApiError> {
        let d = self.descriptor;
        let response = match d.method() {
            HttpMethod::Get => transport.get(d, &self.path).await,
            HttpMethod::Post => transport.post(d, &self.path, &self.payload).await,
            HttpMethod::Put => transport.put(d, &self.path, &self.payload).await,
            HttpMethod::Delete => transport.delete(d, &self.path).await,
        }?;
        Ok(response)
    }
}

/// Executes operation descriptors against a transport.
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
}

impl<T> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve the path and payload for one call.
    ///
    /// Fails with `MalformedRequest` when the path argument count does not
    /// match the template, a path argument is empty, or a required body
    /// field is absent. Body arguments outside the allow-list are dropped.
    pub fn prepare<'d>(
        descriptor: &'d OperationDescriptor,
        path_args: &[&str],
        body_args: BodyArgs,
    ) -> Result<PreparedCall<'d>, ApiError> {
        let path = path::resolve(descriptor, path_args)?;
        let payload = Payload::filter(descriptor, body_args);
        if let Some(missing) = descriptor
            .required_body_fields()
            .iter()
            .find(|f| !payload.contains_key(f))
        {
            return Err(ApiError::malformed(
                descriptor.id(),
                format!("missing required body field {missing}"),
            ));
        }
        Ok(PreparedCall {
            descriptor,
            path,
            payload,
        })
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn invoke(
        &self,
        descriptor: &OperationDescriptor,
        path_args: &[&str],
        body_args: BodyArgs,
    ) -> Result<Value, ApiError> {
        Self::prepare(descriptor, path_args, body_args)?.send(&self.transport)
    }

    /// Invoke the registered operation named `operation_id`.
    pub fn call(
        &self,
        operation_id: &str,
        path_args: &[&str],
        body_args: BodyArgs,
    ) -> Result<Value, ApiError> {
        self.invoke(lookup(operation_id)?, path_args, body_args)
    }
}

impl<T: AsyncTransport> Dispatcher<T> {
    pub async fn invoke_async(
        &self,
        descriptor: &OperationDescriptor,
        path_args: &[&str],
        body_args: BodyArgs,
    ) -> Result<Value, ApiError> {
        Self::prepare(descriptor, path_args, body_args)?
            .send_async(&self.transport)
            .await
    }

    /// Async variant of [`Dispatcher::call`].
    pub async fn call_async(
        &self,
        operation_id: &str,
        path_args: &[&str],
        body_args: BodyArgs,
    ) -> Result<Value, ApiError> {
        self.invoke_async(lookup(operation_id)?, path_args, body_args)
            .await
    }
}

fn lookup(operation_id: &str) -> Result<&'static OperationDescriptor, ApiError> {
    catalog::find(operation_id).ok_or_else(|| ApiError::UnknownOperation(operation_id.to_string()))
}
