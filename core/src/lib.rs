//! Client core for the Meraki Dashboard REST API.
//!
//! # Overview
//! Every endpoint is an `OperationDescriptor`: HTTP method, path template
//! with named slots, body field allow-list and tags. One `Dispatcher`
//! executes any descriptor: it binds positional path arguments to the
//! template, filters keyword body arguments against the allow-list, and
//! hands the result to a transport.
//!
//! # Design
//! - Descriptor tables are static and checked at compile time; the typed
//!   per-area wrappers in [`api`] are generated from the same declarations.
//! - The dispatcher is stateless and never performs I/O. `Transport` and
//!   `AsyncTransport` are the only I/O boundary, so blocking and async
//!   callers share one dispatch path.
//! - Body arguments outside the allow-list are dropped, not rejected.
//! - Transport errors reach the caller untranslated.

pub mod api;
pub mod client;
pub mod config;
pub mod descriptor;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod path;
pub mod payload;
pub mod transport;
pub mod types;

pub use client::{AsyncDashboardClient, DashboardClient};
pub use config::ClientConfig;
pub use descriptor::OperationDescriptor;
pub use dispatcher::{Dispatcher, PreparedCall};
pub use error::{ApiError, ConfigError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use payload::{body_args, BodyArgs, Payload};
pub use transport::{AsyncTransport, Transport};
#[cfg(feature = "blocking")]
pub use transport::BlockingTransport;
#[cfg(feature = "async")]
pub use transport::ReqwestTransport;
