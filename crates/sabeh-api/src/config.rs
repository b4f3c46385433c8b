//! API environment configuration
//!
//! The environment is resolved once at startup and fixes the base URL
//! and request timeout for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::ApiError;
use crate::Result;

/// Process variable consulted by [`Environment::from_process_env`].
pub const ENV_VAR: &str = "SABEH_ENV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Resolve the environment from `SABEH_ENV`, defaulting to
    /// development. Unrecognized values also fall back to development.
    pub fn from_process_env() -> Self {
        std::env::var(ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Environment::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL including any path prefix (e.g. `/api/v1`).
    pub base_url: Url,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        Self { base_url, timeout }
    }

    pub fn for_environment(environment: Environment) -> Self {
        let (base_url, timeout_secs) = match environment {
            Environment::Development => ("http://localhost:8000/api/v1", 10),
            Environment::Staging => ("https://staging.sabehgroup.com/api/v1", 12),
            Environment::Production => ("https://api.sabehgroup.com/api/v1", 15),
        };

        Self {
            base_url: Url::parse(base_url).expect("environment base URL is valid"),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Build an endpoint URL by appending an absolute path to the base.
    ///
    /// `Url::join` would drop the `/api/v1` prefix for absolute paths,
    /// so the URL is assembled textually.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut raw = self.base_url.as_str().trim_end_matches('/').to_string();
        if !path.starts_with('/') {
            raw.push('/');
        }
        raw.push_str(path);

        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }
}
