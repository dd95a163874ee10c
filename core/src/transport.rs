//! Blocking `Transport` backed by a ureq agent.
//!
//! Status-as-error is disabled so 4xx/5xx responses reach the interpreter as
//! data. HTTP Basic credentials are attached here, never by the client.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::config::RobotConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct UreqTransport {
    agent: ureq::Agent,
    authorization: String,
}

impl UreqTransport {
    pub fn new(login: &str, password: &str, timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            agent,
            authorization: basic_auth(login, password),
        }
    }

    pub fn from_config(config: &RobotConfig) -> Self {
        Self::new(&config.login, &config.password, config.timeout)
    }
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

fn basic_auth(login: &str, password: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{login}:{password}")))
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::trace!(method = %request.method, url = %request.url, "sending request");

        let url = request.url.as_str();
        let auth = self.authorization.as_str();
        let has_content_type = request.header("Content-Type").is_some();
        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), &request.headers)
                .header("Authorization", auth)
                .call(),
            HttpMethod::Delete => with_headers(self.agent.delete(url), &request.headers)
                .header("Authorization", auth)
                .call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(url), &request.headers).header("Authorization", auth);
                match &request.body {
                    Some(body) if has_content_type => builder.send(body.as_bytes()),
                    Some(body) => builder.content_type(FORM_CONTENT_TYPE).send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let builder = with_headers(self.agent.put(url), &request.headers).header("Authorization", auth);
                match &request.body {
                    Some(body) if has_content_type => builder.send(body.as_bytes()),
                    Some(body) => builder.content_type(FORM_CONTENT_TYPE).send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| TransportError::Unreachable(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::InvalidBody(e.to_string()))?;

        tracing::trace!(status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}
