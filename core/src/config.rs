//! Client configuration resolved from the environment.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://robot-ws.your-server.de";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_URL: &str = "ROBOT_URL";
pub const ENV_LOGIN: &str = "ROBOT_LOGIN";
pub const ENV_PASSWORD: &str = "ROBOT_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "ROBOT_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
}

/// Webservice location, credentials and request timeout.
#[derive(Clone, PartialEq, Eq)]
pub struct RobotConfig {
    pub base_url: String,
    pub login: String,
    pub password: String,
    pub timeout: Duration,
}

impl RobotConfig {
    pub fn new(base_url: impl Into<String>, login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            login: login.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `ROBOT_URL`, `ROBOT_LOGIN`, `ROBOT_PASSWORD` and
    /// `ROBOT_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let base_url = get(ENV_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let login = get(ENV_LOGIN).ok_or(ConfigError::Missing(ENV_LOGIN))?;
        let password = get(ENV_PASSWORD).ok_or(ConfigError::Missing(ENV_PASSWORD))?;
        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(value) => value
                .parse::<u64>()
                .map(Duration::from_secs)
                .inspect_err(|error| {
                    tracing::warn!(var = ENV_TIMEOUT_SECS, %value, %error, "invalid timeout override, using default");
                })
                .unwrap_or(DEFAULT_TIMEOUT),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url,
            login,
            password,
            timeout,
        })
    }
}

impl fmt::Debug for RobotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RobotConfig")
            .field("base_url", &self.base_url)
            .field("login", &self.login)
            .field("password", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}
