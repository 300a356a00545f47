use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RenderError {
    #[error(
        "Missing Parameters Error: parameters were missing from the request: {} {location}",
        .missing.join(", ")
    )]
    MissingParameters {
        missing: Vec<String>,
        location: ErrorLocation,
    },
}

impl RenderError {
    #[track_caller]
    pub fn missing_parameters(missing: Vec<String>) -> Self {
        RenderError::MissingParameters {
            missing,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Every placeholder that was left unresolved.
    pub fn missing(&self) -> &[String] {
        match self {
            RenderError::MissingParameters { missing, .. } => missing,
        }
    }
}
