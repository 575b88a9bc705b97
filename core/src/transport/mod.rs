//! Transport capabilities consumed by the dispatcher.
//!
//! # Design
//! The dispatcher never performs I/O itself. It resolves the path, filters
//! the payload and hands both to a transport, together with the descriptor
//! so the transport can log or trace by operation id and tags. The same
//! dispatcher works over either capability: `Transport` for blocking
//! callers, `AsyncTransport` for async ones.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::descriptor::OperationDescriptor;
use crate::error::TransportError;
use crate::payload::Payload;

#[cfg(feature = "blocking")]
mod blocking;
#[cfg(feature = "async")]
mod nonblocking;

#[cfg(feature = "blocking")]
pub use blocking::BlockingTransport;
#[cfg(feature = "async")]
pub use nonblocking::ReqwestTransport;

/// Blocking request execution.
pub trait Transport {
    fn get(&self, descriptor: &OperationDescriptor, path: &str) -> Result<Value, TransportError>;

    fn post(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError>;

    fn put(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError>;

    fn delete(&self, descriptor: &OperationDescriptor, path: &str)
        -> Result<Value, TransportError>;
}

/// Async request execution.
#[async_trait]
pub trait AsyncTransport: Send + Sync {
    async fn get(&self, descriptor: &OperationDescriptor, path: &str)
        -> Result<Value, TransportError>;

    async fn post(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError>;

    async fn put(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError>;

    async fn delete(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
    ) -> Result<Value, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, descriptor: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
        (**self).get(descriptor, path)
    }

    fn post(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        (**self).post(descriptor, path, payload)
    }

    fn put(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        (**self).put(descriptor, path, payload)
    }

    fn delete(&self, descriptor: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
        (**self).delete(descriptor, path)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, descriptor: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
        (**self).get(descriptor, path)
    }

    fn post(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        (**self).post(descriptor, path, payload)
    }

    fn put(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        (**self).put(descriptor, path, payload)
    }

    fn delete(&self, descriptor: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
        (**self).delete(descriptor, path)
    }
}

#[async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for Arc<T> {
    async fn get(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
    ) -> Result<Value, TransportError> {
        (**self).get(descriptor, path).await
    }

    async fn post(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        (**self).post(descriptor, path, payload).await
    }

    async fn put(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
        payload: &Payload,
    ) -> Result<Value, TransportError> {
        (**self).put(descriptor, path, payload).await
    }

    async fn delete(
        &self,
        descriptor: &OperationDescriptor,
        path: &str,
    ) -> Result<Value, TransportError> {
        (**self).delete(descriptor, path).await
    }
}
