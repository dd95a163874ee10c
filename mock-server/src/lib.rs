//! In-memory emulation of a slice of the Robot webservice.
//!
//! Covers servers, failover routing, reverse DNS, SSH keys, the rescue boot
//! option and server ordering. Requests must carry HTTP Basic credentials;
//! bodies are form-encoded with `key[]` list fields; failures use the
//! webservice's `{"error": {...}}` envelope.

pub mod error;
pub mod form;
mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tokio::{net::TcpListener, sync::RwLock};

use crate::{error::ApiError, state::Robot};

pub use state::{Db, FAILOVER_IP, SERVER_A, SERVER_B};

/// HTTP Basic credentials the emulated webservice accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            login: "robot".to_string(),
            password: "secret".to_string(),
        }
    }
}

impl Credentials {
    /// `ROBOT_LOGIN` / `ROBOT_PASSWORD`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login: std::env::var("ROBOT_LOGIN").unwrap_or(defaults.login),
            password: std::env::var("ROBOT_PASSWORD").unwrap_or(defaults.password),
        }
    }

    fn header_value(&self) -> String {
        format!("Basic {}", BASE64.encode(format!("{}:{}", self.login, self.password)))
    }
}

pub fn app() -> Router {
    app_with(Credentials::default())
}

pub fn app_with(credentials: Credentials) -> Router {
    let db: Db = Arc::new(RwLock::new(Robot::seeded()));
    let expected = Arc::new(credentials.header_value());
    routes::router()
        .layer(middleware::from_fn_with_state(expected, require_basic_auth))
        .with_state(db)
}

pub async fn run(listener: TcpListener, credentials: Credentials) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(credentials)).await
}

async fn require_basic_auth(State(expected): State<Arc<String>>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected.as_str());
    if !authorized {
        tracing::debug!(path = %request.uri().path(), "rejected request without valid credentials");
        return ApiError::unauthorized().into_response();
    }
    next.run(request).await
}
