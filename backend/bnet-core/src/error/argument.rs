use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// A caller-supplied argument failed a local shape check.
#[derive(Debug, ThisError)]
pub enum ArgumentError {
    #[error("Type Error: {var_name} expected to be {expected}; got '{received}' {location}")]
    Type {
        var_name: &'static str,
        expected: &'static str,
        received: String,
        location: ErrorLocation,
    },
}

impl ArgumentError {
    #[track_caller]
    pub fn type_mismatch(
        var_name: &'static str,
        expected: &'static str,
        received: impl Into<String>,
    ) -> Self {
        ArgumentError::Type {
            var_name,
            expected,
            received: received.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn var_name(&self) -> &'static str {
        match self {
            ArgumentError::Type { var_name, .. } => var_name,
        }
    }
}

/// Require a number-like value such as a membership id.
///
/// Ids routinely exceed `i64`, so they stay strings and are only checked for
/// digits here.
#[track_caller]
pub fn require_number_like(var_name: &'static str, value: &str) -> Result<(), ArgumentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ArgumentError::type_mismatch(var_name, "number-like", value));
    }
    Ok(())
}

#[track_caller]
pub fn require_non_empty(var_name: &'static str, value: &str) -> Result<(), ArgumentError> {
    if value.trim().is_empty() {
        return Err(ArgumentError::type_mismatch(var_name, "a non-empty string", value));
    }
    Ok(())
}
