use models::{Credentials, OAuthToken};

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use zeroize::Zeroizing;

/// The `Authorization` header for one request.
///
/// A user token with an access value always wins. Everything else, OAuth
/// token exchanges included, is sent with the application's client id and
/// secret.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    Bearer(String),
    /// Already base64-encoded `client_id:client_secret`.
    Basic(String),
}

impl Authorization {
    pub fn select(credentials: &Credentials, token: Option<&OAuthToken>) -> Self {
        match token {
            Some(token) if token.has_access_token() => {
                Authorization::Bearer(token.access_token.clone())
            }
            _ => {
                let secret = credentials
                    .client_secret()
                    .map(|secret| secret.expose())
                    .unwrap_or_default();
                // plaintext pair is scrubbed on drop
                let pair = Zeroizing::new(format!("{}:{}", credentials.client_id(), secret));
                Authorization::Basic(STANDARD.encode(pair.as_bytes()))
            }
        }
    }

    pub fn header_value(&self) -> String {
        match self {
            Authorization::Bearer(token) => format!("Bearer {token}"),
            Authorization::Basic(encoded) => format!("Basic {encoded}"),
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Authorization::Bearer(_) => "bearer",
            Authorization::Basic(_) => "basic",
        }
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Authorization({}, [REDACTED])", self.mode())
    }
}
