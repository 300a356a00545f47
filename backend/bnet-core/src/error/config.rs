use common::ErrorLocation;
use models::ModelError;

use std::panic::Location;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Missing Variable Error: {name} is not set {location}")]
    MissingVariable {
        name: &'static str,
        location: ErrorLocation,
    },

    #[error("Config Invalid Url Error: {name}: {reason} {location}")]
    InvalidUrl {
        name: &'static str,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Credentials(#[from] ModelError),
}

impl ConfigError {
    #[track_caller]
    pub fn missing_variable(name: &'static str) -> Self {
        ConfigError::MissingVariable {
            name,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        ConfigError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidUrl {
            name,
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
