use std::{env, fmt, time::Duration};

use reqwest::Url;

use super::{optional_var, parsed_var, required_var};
use crate::{
    constants::{
        DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS, DEFAULT_RELAYER_ENDPOINT,
        DEFAULT_VISIBILITY_ATTEMPTS, DEFAULT_VISIBILITY_INTERVAL_MS,
    },
    models::ConfigError,
};

/// How long a submitted transaction may take to show up in the relayer's
/// transaction list before the visibility check fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityPolicy {
    /// Number of list reads, including the first one. Always at least 1.
    pub attempts: u32,
    /// Delay between two reads.
    pub interval: Duration,
}

impl VisibilityPolicy {
    /// A single read right after submission.
    pub fn single_shot() -> Self {
        Self {
            attempts: 1,
            interval: Duration::ZERO,
        }
    }

    pub fn polling(attempts: u32, interval: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            interval,
        }
    }
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self::polling(
            DEFAULT_VISIBILITY_ATTEMPTS,
            Duration::from_millis(DEFAULT_VISIBILITY_INTERVAL_MS),
        )
    }
}

/// Connection settings for the relayer under test.
#[derive(Clone, PartialEq)]
pub struct RelayerClientConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8080`.
    pub base_url: String,
    pub relayer_id: String,
    pub api_key: String,
    pub request_timeout: Duration,
    pub visibility: VisibilityPolicy,
}

impl fmt::Debug for RelayerClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayerClientConfig")
            .field("base_url", &self.base_url)
            .field("relayer_id", &self.relayer_id)
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("visibility", &self.visibility)
            .finish()
    }
}

impl RelayerClientConfig {
    /// Loads the configuration from the environment, reading `.env` first if present.
    ///
    /// # Environment Variables
    ///
    /// - `RELAYER_ID`: relayer the checks run against (required)
    /// - `API_KEY`: bearer token (required)
    /// - `HOST_PORT` or `RELAYER_ENDPOINT`: base URL, defaults to `http://localhost:8080`
    /// - `RELAYER_HTTP_TIMEOUT_SECONDS`: per-request timeout, defaults to 10, must be at least 1
    /// - `RELAYER_VISIBILITY_ATTEMPTS`: list reads after a send, defaults to 1
    /// - `RELAYER_VISIBILITY_INTERVAL_MS`: delay between those reads, defaults to 1000
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let relayer_id = required_var(&lookup, "RELAYER_ID")?;
        let api_key = required_var(&lookup, "API_KEY")?;

        let base_url = optional_var(&lookup, "HOST_PORT")
            .or_else(|| optional_var(&lookup, "RELAYER_ENDPOINT"))
            .unwrap_or_else(|| DEFAULT_RELAYER_ENDPOINT.to_string());
        let base_url = normalize_base_url(&base_url)?;

        let timeout_seconds = parsed_var(
            &lookup,
            "RELAYER_HTTP_TIMEOUT_SECONDS",
            DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS,
        )?;
        if timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                name: "RELAYER_HTTP_TIMEOUT_SECONDS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let attempts = parsed_var(
            &lookup,
            "RELAYER_VISIBILITY_ATTEMPTS",
            DEFAULT_VISIBILITY_ATTEMPTS,
        )?;
        if attempts == 0 {
            return Err(ConfigError::InvalidValue {
                name: "RELAYER_VISIBILITY_ATTEMPTS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let interval_ms = parsed_var(
            &lookup,
            "RELAYER_VISIBILITY_INTERVAL_MS",
            DEFAULT_VISIBILITY_INTERVAL_MS,
        )?;

        Ok(Self {
            base_url,
            relayer_id: relayer_id.trim().to_string(),
            api_key: api_key.trim().to_string(),
            request_timeout: Duration::from_secs(timeout_seconds),
            visibility: VisibilityPolicy::polling(attempts, Duration::from_millis(interval_ms)),
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        name: "HOST_PORT".to_string(),
        reason,
    };

    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| invalid(format!("{trimmed}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(invalid(format!("unsupported scheme `{scheme}`"))),
    }
}
