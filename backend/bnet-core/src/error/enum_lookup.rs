use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum EnumError {
    #[error("Enum Error: {key} is not a valid {description} {location}")]
    UnknownKey {
        key: String,
        description: &'static str,
        location: ErrorLocation,
    },

    #[error("Enum Table Error: {description}: {reason} {location}")]
    InvalidTable {
        description: &'static str,
        reason: String,
        location: ErrorLocation,
    },
}

impl EnumError {
    #[track_caller]
    pub fn unknown_key(key: impl Into<String>, description: &'static str) -> Self {
        EnumError::UnknownKey {
            key: key.into(),
            description,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_table(description: &'static str, reason: impl Into<String>) -> Self {
        EnumError::InvalidTable {
            description,
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The rejected key, for unknown-key errors.
    pub fn key(&self) -> Option<&str> {
        match self {
            EnumError::UnknownKey { key, .. } => Some(key),
            EnumError::InvalidTable { .. } => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EnumError::UnknownKey { description, .. }
            | EnumError::InvalidTable { description, .. } => description,
        }
    }
}
