use crate::error::argument::ArgumentError;
use crate::error::request::RequestError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum OAuthError {
    #[error("OAuth Config Error: a client secret is required for token requests {location}")]
    MissingClientSecret { location: ErrorLocation },

    #[error("OAuth Session Error: no authorized session to refresh {location}")]
    NotAuthorized { location: ErrorLocation },

    /// The token endpoint answered with an OAuth `error` body.
    #[error("OAuth Rejected Error: {error}: {description} {location}")]
    Rejected {
        error: String,
        description: String,
        location: ErrorLocation,
    },

    #[error("OAuth Token Error: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl OAuthError {
    #[track_caller]
    pub fn missing_client_secret() -> Self {
        OAuthError::MissingClientSecret {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authorized() -> Self {
        OAuthError::NotAuthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(error: impl Into<String>, description: impl Into<String>) -> Self {
        OAuthError::Rejected {
            error: error.into(),
            description: description.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// `invalid_grant` means the code or refresh token is spent; start over.
    pub fn is_invalid_grant(&self) -> bool {
        matches!(self, OAuthError::Rejected { error, .. } if error == "invalid_grant")
    }
}

impl From<serde_json::Error> for OAuthError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        OAuthError::MalformedToken {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
