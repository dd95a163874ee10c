//! The Robot webservice client.
//!
//! # Design
//! `RobotClient` holds a base URL, a fixed set of default headers and the
//! injected `Transport`; nothing changes after construction. Every resource
//! method (see `crate::resources`) builds a `ResourceUrl`, optionally a
//! `FormParams` body, and funnels through `send`, which performs exactly one
//! round trip and interprets the outcome. There is no retry and no local
//! recovery: every failure goes straight back to the caller.

use serde_json::Value;

use crate::config::RobotConfig;
use crate::error::RobotError;
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::request::{FormParams, ResourceUrl};
use crate::response;
use crate::transport::UreqTransport;

/// Identifies this client in the `User-Agent` header.
pub const USER_AGENT: &str = concat!("robot-client-rs/", env!("CARGO_PKG_VERSION"));

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone)]
pub struct RobotClient<T> {
    base_url: String,
    headers: Vec<(String, String)>,
    transport: T,
}

impl RobotClient<UreqTransport> {
    /// Client over the default blocking transport, authenticated with the
    /// configured credentials.
    pub fn from_config(config: &RobotConfig) -> Self {
        Self::new(&config.base_url, UreqTransport::from_config(config))
    }
}

impl<T: Transport> RobotClient<T> {
    /// Sets `Accept: application/json` and the client's `User-Agent`.
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("User-Agent".to_string(), USER_AGENT.to_string()),
            ],
            transport,
        }
    }

    /// Add or replace (case-insensitively) a default header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match self.headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn resource(&self, path: &str) -> ResourceUrl {
        ResourceUrl::new(&self.base_url, path)
    }

    /// Build the request for `method` on `url`. A form body, when given, is
    /// encoded and tagged with the form content type.
    pub fn build_request(&self, method: HttpMethod, url: ResourceUrl, form: Option<&FormParams>) -> HttpRequest {
        let mut headers = self.headers.clone();
        let body = form.map(|form| {
            headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
            form.encode()
        });
        HttpRequest {
            method,
            url: url.into_string(),
            headers,
            body,
        }
    }

    pub(crate) fn get(&self, url: ResourceUrl) -> Result<Value, RobotError> {
        self.send(self.build_request(HttpMethod::Get, url, None))
    }

    pub(crate) fn post(&self, url: ResourceUrl, form: &FormParams) -> Result<Value, RobotError> {
        self.send(self.build_request(HttpMethod::Post, url, Some(form)))
    }

    pub(crate) fn put(&self, url: ResourceUrl, form: Option<&FormParams>) -> Result<Value, RobotError> {
        self.send(self.build_request(HttpMethod::Put, url, form))
    }

    pub(crate) fn delete(&self, url: ResourceUrl) -> Result<Value, RobotError> {
        self.send(self.build_request(HttpMethod::Delete, url, None))
    }

    /// One round trip: execute through the transport, then interpret.
    pub fn send(&self, request: HttpRequest) -> Result<Value, RobotError> {
        tracing::debug!(method = %request.method, url = %request.url, "robot request");
        let outcome = self.transport.execute(&request);
        let status = outcome.as_ref().ok().map(|response| response.status);

        match response::interpret(outcome) {
            Ok(value) => {
                tracing::debug!(method = %request.method, url = %request.url, status, "robot response");
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(
                    method = %request.method,
                    url = %request.url,
                    status,
                    code = err.code(),
                    error = %err,
                    "robot request failed"
                );
                Err(err)
            }
        }
    }
}
