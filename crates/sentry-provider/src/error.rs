use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Config error: {0}")]
    Config(#[from] sentry_config::ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] sentry_client::ClientError),

    #[error("Logging error: {message}")]
    Logging { message: String },
}

pub type Result<T> = std::result::Result<T, ProviderError>;
