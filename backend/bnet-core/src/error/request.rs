use crate::request_client::payload::ApiErrorPayload;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failure of a call that reached (or tried to reach) the platform.
#[derive(Debug, ThisError)]
pub enum RequestError {
    /// The platform answered with an application error code.
    #[error(
        "Remote Error: {} ({}) {} {location}",
        .payload.error_code,
        .payload.error_status,
        .payload.message
    )]
    Remote {
        payload: ApiErrorPayload,
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    /// No usable JSON came back: network failure, HTML error page, malformed body.
    #[error("Transport Error: {reason} {location}")]
    Transport {
        reason: String,
        status: Option<HttpStatusCode>,
        body: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid Header Error: {message} {location}")]
    InvalidHeader {
        message: String,
        location: ErrorLocation,
    },

    #[error("Encode Error: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
    },
}

impl RequestError {
    #[track_caller]
    pub fn remote(payload: ApiErrorPayload, status: HttpStatusCode) -> Self {
        RequestError::Remote {
            payload,
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(
        reason: impl Into<String>,
        status: Option<HttpStatusCode>,
        body: Option<String>,
    ) -> Self {
        RequestError::Transport {
            reason: reason.into(),
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_header(message: impl Into<String>) -> Self {
        RequestError::InvalidHeader {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Platform `ErrorCode`, for remote errors only.
    pub fn error_code(&self) -> Option<i64> {
        match self {
            RequestError::Remote { payload, .. } => Some(payload.error_code),
            _ => None,
        }
    }

    /// Seconds the platform asked us to wait before calling again.
    pub fn throttle_seconds(&self) -> Option<i64> {
        match self {
            RequestError::Remote { payload, .. } if payload.throttle_seconds > 0 => {
                Some(payload.throttle_seconds)
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            RequestError::Remote { status, .. } => Some(*status),
            RequestError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, RequestError::Remote { .. })
    }
}

impl From<reqwest::Error> for RequestError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        RequestError::Transport {
            status: error.status().map(|s| HttpStatusCode(s.as_u16())),
            reason: error.to_string(),
            body: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for RequestError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        RequestError::Encode {
            message: format!("rendered uri is not a valid url: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for RequestError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        RequestError::Encode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
