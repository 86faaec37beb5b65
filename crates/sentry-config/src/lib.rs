mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;


pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_DIR_ENV: &str = "SENTRY_PROVIDER_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".sentry-provider";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "https://sentry.io/api/";
const DEFAULT_USER_AGENT: &str = concat!("sentry-provider/", env!("CARGO_PKG_VERSION"));

// Applies to the shared HTTP client only; lookups never override it.
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
