//! Remote classification service configuration.
//!
//! The presence of a config is the capability check: a [`Classifier`] built
//! without one never attempts the remote path and goes straight to the rules.
//!
//! [`Classifier`]: crate::Classifier

use std::env;
use std::time::Duration;
use tracing::info;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the remote classification service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the OpenAI-compatible API.
    pub api_url: String,
    /// Bearer token for the API.
    pub api_key: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Upper bound for a single remote request.
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Builds a config from environment variables.
    ///
    /// Returns `None` when `TASKMIND_API_KEY` is absent or empty, which
    /// disables the remote path entirely. `TASKMIND_API_URL`,
    /// `TASKMIND_MODEL` and `TASKMIND_TIMEOUT_SECS` override the defaults.
    pub fn from_env() -> Option<Self> {
        dotenv::dotenv().ok();

        let api_key = env::var("TASKMIND_API_KEY").ok().filter(|k| !k.is_empty())?;
        let api_url = env::var("TASKMIND_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = env::var("TASKMIND_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout_secs = env::var("TASKMIND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        info!("Remote classification configured: {} ({})", api_url, model);

        Some(Self {
            api_url,
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Builds a config with explicit values and the default timeout.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
