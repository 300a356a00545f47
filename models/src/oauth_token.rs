//! OAuth token record issued by the platform token endpoint.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// A user's OAuth grant.
///
/// Owned by the caller: the core never caches, persists, or expires it. Call
/// `refresh_access_token` before `expires_in` elapses, or after a protected
/// call fails with an authorization error.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Seconds until `access_token` expires.
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: String,
    /// Lifetime of `refresh_token`, as reported by the platform.
    #[serde(default)]
    pub refresh_expires_in: u64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub membership_id: String,
}

impl OAuthToken {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            expires_in: 0,
            refresh_token: refresh_token.into(),
            refresh_expires_in: 0,
            membership_id: String::new(),
        }
    }

    /// A token without an access value cannot authorize anything.
    pub fn has_access_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.trim().is_empty()
    }
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthToken")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &"[REDACTED]")
            .field("refresh_expires_in", &self.refresh_expires_in)
            .field("membership_id", &self.membership_id)
            .finish()
    }
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(u64),
}

// membership ids arrive as JSON strings, but older payloads used numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(text) => text,
        StringOrNumber::Number(number) => number.to_string(),
    })
}
