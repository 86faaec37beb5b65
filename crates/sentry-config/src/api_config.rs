use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::fmt;

use serde::Deserialize;
use url::Url;

/// Connection settings for the Sentry REST API.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root, e.g. `https://sentry.io/api/` or a self-hosted install
    pub base_url: String,
    /// Auth token sent as `Authorization: Bearer <token>`
    pub token: Option<String>,
    pub user_agent: String,
    /// Whole-request timeout of the shared HTTP client
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            token: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Keeps the token out of `{:?}` output.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::api(format!("api.base_url '{}' is invalid: {}", self.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::api(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ConfigError::api("api.token cannot be blank when set"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::api("api.user_agent cannot be empty"));
        }

        Ok(())
    }
}
