//! Interpretation of one transport outcome into a JSON value or a `RobotError`.
//!
//! Order matters: reachability first, then JSON decoding (so a garbage body
//! is a decode error whatever the status), then the error-status range.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ProviderError, RobotError, TransportError};
use crate::http::HttpResponse;

/// Statuses the webservice answers with an error envelope.
pub const ERROR_STATUS_RANGE: std::ops::RangeInclusive<u16> = 400..=503;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(default)]
    missing: Option<Vec<String>>,
    #[serde(default)]
    invalid: Option<Vec<String>>,
}

/// Interpret a full transport outcome.
pub fn interpret(outcome: Result<HttpResponse, TransportError>) -> Result<Value, RobotError> {
    let response = outcome?;
    parse_response(&response)
}

/// Interpret a response that did arrive.
pub fn parse_response(response: &HttpResponse) -> Result<Value, RobotError> {
    let value = decode_body(&response.body)?;
    if ERROR_STATUS_RANGE.contains(&response.status) {
        return Err(provider_error(response.status, value, &response.body));
    }
    Ok(value)
}

/// Empty bodies decode to `{}`; JSON `null` counts as undecodable.
fn decode_body(body: &str) -> Result<Value, RobotError> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => Err(RobotError::ResponseDecode("body is JSON null".to_string())),
        Ok(value) => Ok(value),
        Err(e) => Err(RobotError::ResponseDecode(e.to_string())),
    }
}

fn provider_error(status: u16, value: Value, raw: &str) -> RobotError {
    match serde_json::from_value::<ErrorEnvelope>(value) {
        Ok(ErrorEnvelope { error }) => RobotError::Provider(ProviderError {
            status,
            code: error.code,
            message: error.message,
            missing: error.missing.unwrap_or_default(),
            invalid: error.invalid.unwrap_or_default(),
        }),
        Err(_) => RobotError::MalformedErrorResponse {
            status,
            body: raw.to_string(),
        },
    }
}

/// Map a decoded value onto a caller-chosen type.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, RobotError> {
    serde_json::from_value(value).map_err(|e| RobotError::ResponseDecode(e.to_string()))
}
