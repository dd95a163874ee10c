//! Blocking client for the Robot server-management webservice.
//!
//! # Overview
//! Every operation maps one method call onto one HTTP round trip: a fixed
//! path under the base URL, a verb, and a flat form-encoded payload. The
//! decoded JSON comes back as `serde_json::Value`; failures come back as
//! `RobotError`.
//!
//! # Design
//! - `RobotClient` is immutable after construction and holds only the base
//!   URL, default headers and the injected `Transport`.
//! - `Transport` owns the network: connection, TLS, Basic auth, timeouts.
//!   `UreqTransport` is the default; tests inject in-memory transports.
//! - `response::interpret` is the single place that turns a raw outcome into
//!   a value or an error.
//! - `models` offers typed views for callers that want them; the resource
//!   methods never force a shape onto the webservice's documents.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

mod resources;

#[cfg(test)]
mod test_support;

pub use client::{RobotClient, USER_AGENT};
pub use config::{ConfigError, RobotConfig};
pub use error::{ProviderError, RobotError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use request::{FormParams, ResourceUrl};
pub use transport::UreqTransport;
pub use types::{MarketOrder, ParseKindError, ResetType, ServerOrder, TrafficLimits, TrafficQuery, TrafficRange, TrafficType};
