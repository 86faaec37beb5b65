use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

const HTTP_NOT_FOUND: u16 = 404;

/// Errors that can occur during Sentry API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Sentry API error: {detail} (status: {status}) {location}")]
    Api {
        status: u16,
        detail: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, detail: String) -> Self {
        ClientError::Api {
            status,
            detail,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(url: &str, message: S) -> Self {
        ClientError::InvalidUrl {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status reported by the server, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Description of the failure without the source location
    pub fn message(&self) -> String {
        match self {
            ClientError::Http { message, .. } => format!("HTTP request error: {}", message),
            ClientError::Api { status, detail, .. } => {
                format!("Sentry API error: {} (status: {})", detail, status)
            }
            ClientError::Json { message, .. } => format!("JSON parse error: {}", message),
            ClientError::InvalidUrl { url, message, .. } => {
                format!("Invalid URL '{}': {}", url, message)
            }
        }
    }

    /// True exactly when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(HTTP_NOT_FOUND)
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
