use crate::credentials::{AppInfo, Credentials};
use crate::error::model_error::ModelError;
use crate::ErrorLocation;

use common::RedactedSecret;

use std::panic::Location;

/// Builder for creating validated [`Credentials`].
///
/// Validation happens eagerly in [`build`](Self::build) so a misconfigured
/// application fails at startup rather than on its first request.
#[derive(Debug, Default)]
pub struct CredentialsBuilder {
    api_key: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    user_agent: Option<String>,
    app_info: Option<AppInfo>,
}

impl CredentialsBuilder {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Accepts anything number-like: `1234`, `"1234"`.
    pub fn with_client_id(mut self, client_id: impl ToString) -> Self {
        self.client_id = Some(client_id.to_string());
        self
    }

    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Used to generate the user agent when none is set explicitly.
    pub fn with_app_info(mut self, app_info: AppInfo) -> Self {
        self.app_info = Some(app_info);
        self
    }

    /// Build the Credentials with validation.
    #[track_caller]
    pub fn build(self) -> Result<Credentials, ModelError> {
        let api_key = self.api_key.ok_or_else(|| ModelError::Validation {
            message: String::from("API key is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let api_key = RedactedSecret::new(api_key);
        if api_key.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("API key cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let client_id = self.client_id.ok_or_else(|| ModelError::Validation {
            message: String::from("Client id is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let client_id = client_id.trim().to_string();
        match client_id.parse::<u64>() {
            Ok(id) if id > 0 => {}
            _ => {
                return Err(ModelError::Validation {
                    message: format!("The client id '{client_id}' could not be parsed as a number"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let client_secret = match self.client_secret {
            Some(secret) => {
                let secret = RedactedSecret::new(secret);
                if secret.is_empty() {
                    return Err(ModelError::Validation {
                        message: String::from("Client secret cannot be empty when provided"),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                Some(secret)
            }
            None => None,
        };

        let user_agent = match self.user_agent {
            Some(user_agent) if !user_agent.trim().is_empty() => user_agent.trim().to_string(),
            _ => self.app_info.unwrap_or_default().user_agent(&client_id),
        };

        if user_agent.chars().any(char::is_control) {
            return Err(ModelError::Validation {
                message: String::from("User agent cannot contain control characters"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Credentials {
            api_key,
            client_id,
            client_secret,
            user_agent,
        })
    }
}
