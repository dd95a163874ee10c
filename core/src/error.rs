//! Error types for the Robot webservice client.
//!
//! # Design
//! Local failures (unreachable endpoint, undecodable body, error status
//! without an error envelope) get fixed variants. Everything the webservice
//! reports itself lands in `Provider` with its code and message verbatim.
//! `RobotError::code` flattens both into the string codes callers match on.

/// Errors reported by a `Transport` before any HTTP status is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Connection-level failure: DNS, refused connection, TLS, timeout.
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),

    /// A response arrived but its body could not be read as text.
    #[error("response body unreadable: {0}")]
    InvalidBody(String),
}

/// An error envelope returned by the webservice for statuses 400..=503.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub status: u16,
    pub code: String,
    pub message: String,
    /// Names of required parameters the request lacked (`INVALID_INPUT`).
    pub missing: Vec<String>,
    /// Names of parameters the webservice rejected (`INVALID_INPUT`).
    pub invalid: Vec<String>,
}

/// Errors returned by every `RobotClient` operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RobotError {
    /// The transport could not reach the webservice.
    #[error("robot not reachable: {0}")]
    NotReachable(String),

    /// The body was neither empty nor valid JSON, or could not be mapped onto
    /// the requested type.
    #[error("response can not be decoded: {0}")]
    ResponseDecode(String),

    /// An error status arrived without a usable `{"error": {...}}` envelope.
    #[error("HTTP {status} without error envelope: {body}")]
    MalformedErrorResponse { status: u16, body: String },

    /// The webservice rejected the request.
    #[error("{} ({})", .0.message, .0.code)]
    Provider(ProviderError),
}

impl RobotError {
    pub const NOT_REACHABLE: &'static str = "NOT_REACHABLE";
    pub const RESPONSE_DECODE_ERROR: &'static str = "RESPONSE_DECODE_ERROR";
    pub const MALFORMED_ERROR_RESPONSE: &'static str = "MALFORMED_ERROR_RESPONSE";

    /// Stable error code: one of the local constants or the provider's code.
    pub fn code(&self) -> &str {
        match self {
            RobotError::NotReachable(_) => Self::NOT_REACHABLE,
            RobotError::ResponseDecode(_) => Self::RESPONSE_DECODE_ERROR,
            RobotError::MalformedErrorResponse { .. } => Self::MALFORMED_ERROR_RESPONSE,
            RobotError::Provider(err) => &err.code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RobotError::NotReachable(_) => "robot not reachable",
            RobotError::ResponseDecode(_) => "response can not be decoded",
            RobotError::MalformedErrorResponse { .. } => "error response can not be decoded",
            RobotError::Provider(err) => &err.message,
        }
    }

    /// HTTP status, when the failure happened after a response arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            RobotError::MalformedErrorResponse { status, .. } => Some(*status),
            RobotError::Provider(err) => Some(err.status),
            _ => None,
        }
    }

    pub fn is_provider_code(&self, code: &str) -> bool {
        matches!(self, RobotError::Provider(err) if err.code == code)
    }
}

impl From<TransportError> for RobotError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Unreachable(detail) => RobotError::NotReachable(detail),
            TransportError::InvalidBody(detail) => RobotError::ResponseDecode(detail),
        }
    }
}
