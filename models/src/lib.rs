//! Data carried through every platform call.
//!
//! - [`Credentials`]: the application's API key, OAuth client id/secret and
//!   user agent, validated once by [`CredentialsBuilder`]
//! - [`OAuthToken`]: a user's access/refresh token pair as issued by the token
//!   endpoint
//!
//! Models have no I/O. The request core in `bnet-core` consumes them.

pub mod credentials;
pub mod error;
pub mod oauth_token;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use credentials::builder::CredentialsBuilder;
pub use credentials::{AppInfo, Credentials};
pub use error::model_error::ModelError;
pub use oauth_token::OAuthToken;
