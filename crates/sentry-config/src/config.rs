use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LogLevel, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load provider configuration.
    ///
    /// Loading order:
    /// 1. `SENTRY_PROVIDER_CONFIG_DIR` env var, else `./.sentry-provider/`
    /// 2. `config.toml` in that directory if it exists, else defaults
    /// 3. `SENTRY_*` environment variable overrides
    ///
    /// The directory is never created. Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SENTRY_PROVIDER_CONFIG_DIR env var > ./.sentry-provider/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;

        if let Some(file) = self.logging.file.as_deref()
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be blank when set"));
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s, token: {})",
            self.api.base_url,
            self.api.timeout_secs,
            if self.api.token.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        if self.api.token.is_none() {
            warn!("No Sentry auth token configured; requests will be anonymous");
        }
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Api
        Self::apply_env_string("SENTRY_BASE_URL", &mut self.api.base_url);
        Self::apply_env_option_string("SENTRY_AUTH_TOKEN", &mut self.api.token);
        Self::apply_env_string("SENTRY_PROVIDER_USER_AGENT", &mut self.api.user_agent);
        Self::apply_env_parse("SENTRY_PROVIDER_TIMEOUT_SECS", &mut self.api.timeout_secs)?;

        // Logging
        Self::apply_env_log_level("SENTRY_PROVIDER_LOG_LEVEL", &mut self.logging.level)?;
        Self::apply_env_bool("SENTRY_PROVIDER_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SENTRY_PROVIDER_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// A value that does not parse is an error rather than being ignored.
    fn apply_env_parse<T>(var_name: &str, target: &mut T) -> ConfigErrorResult<()>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.parse().map_err(|e: T::Err| {
                ConfigError::config(format!("{var_name}='{val}' is invalid: {e}"))
            })?;
        }
        Ok(())
    }

    /// Helper: Apply environment variable override for the log level.
    /// An unknown name is `InvalidLogLevel`, located here.
    fn apply_env_log_level(var_name: &str, target: &mut LogLevel) -> ConfigErrorResult<()> {
        if let Ok(val) = std::env::var(var_name) {
            *target =
                LogLevel::from_name(&val).ok_or_else(|| ConfigError::invalid_log_level(val))?;
        }
        Ok(())
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
