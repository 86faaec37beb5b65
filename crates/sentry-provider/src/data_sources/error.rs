//! Lookup errors
//!
//! Every variant names the organization and slug that were requested so the
//! host can render an actionable message without extra context.

use crate::{Diagnostic, ProjectKey};

use std::panic::Location;

use error_location::ErrorLocation;
use sentry_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// The organization/slug pair does not resolve to a project (HTTP 404)
    #[error("Project {organization}/{slug} not found {location}")]
    NotFound {
        organization: String,
        slug: String,
        location: ErrorLocation,
    },

    /// Transport, authentication, server or decode failure
    #[error("Failed to read project {organization}/{slug}: {source} {location}")]
    Remote {
        organization: String,
        slug: String,
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Reading project {organization}/{slug} was cancelled {location}")]
    Cancelled {
        organization: String,
        slug: String,
        location: ErrorLocation,
    },

    #[error("Deadline exceeded while reading project {organization}/{slug} {location}")]
    DeadlineExceeded {
        organization: String,
        slug: String,
        location: ErrorLocation,
    },

    /// The payload does not have the shape the projection relies on
    #[error("Unexpected payload for project {organization}/{slug}: {message} {location}")]
    Mapping {
        organization: String,
        slug: String,
        message: String,
        location: ErrorLocation,
    },
}

impl LookupError {
    #[track_caller]
    pub fn not_found(key: &ProjectKey) -> Self {
        LookupError::NotFound {
            organization: key.organization.clone(),
            slug: key.slug.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote(key: &ProjectKey, source: ClientError) -> Self {
        LookupError::Remote {
            organization: key.organization.clone(),
            slug: key.slug.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled(key: &ProjectKey) -> Self {
        LookupError::Cancelled {
            organization: key.organization.clone(),
            slug: key.slug.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn deadline_exceeded(key: &ProjectKey) -> Self {
        LookupError::DeadlineExceeded {
            organization: key.organization.clone(),
            slug: key.slug.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn mapping<S: Into<String>>(key: &ProjectKey, message: S) -> Self {
        LookupError::Mapping {
            organization: key.organization.clone(),
            slug: key.slug.clone(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }

    /// Headline shown to the user for this class of failure
    pub fn summary(&self) -> &'static str {
        match self {
            LookupError::NotFound { .. } => "Sentry project not found",
            LookupError::Remote { .. } => "Failed to read Sentry project",
            LookupError::Cancelled { .. } => "Sentry project read cancelled",
            LookupError::DeadlineExceeded { .. } => "Sentry project read timed out",
            LookupError::Mapping { .. } => "Unexpected Sentry project payload",
        }
    }

    /// Detail line without the source location, for user-facing output
    pub fn detail(&self) -> String {
        match self {
            LookupError::NotFound {
                organization, slug, ..
            } => format!(
                "No project with slug \"{}\" exists in organization \"{}\"",
                slug, organization
            ),
            LookupError::Remote {
                organization,
                slug,
                source,
                ..
            } => format!(
                "Reading project \"{}\" in organization \"{}\" failed: {}",
                slug,
                organization,
                source.message()
            ),
            LookupError::Cancelled {
                organization, slug, ..
            } => format!(
                "The read of project \"{}\" in organization \"{}\" was cancelled",
                slug, organization
            ),
            LookupError::DeadlineExceeded {
                organization, slug, ..
            } => format!(
                "The read of project \"{}\" in organization \"{}\" did not finish before the deadline",
                slug, organization
            ),
            LookupError::Mapping {
                organization,
                slug,
                message,
                ..
            } => format!(
                "Project \"{}\" in organization \"{}\": {}",
                slug, organization, message
            ),
        }
    }
}

impl From<&LookupError> for Diagnostic {
    fn from(err: &LookupError) -> Self {
        Diagnostic::error(err.summary()).with_detail(err.detail())
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
