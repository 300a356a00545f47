//! Endpoint templating and request execution for the Bungie.net platform API.
//!
//! Every resource call goes through the same pipeline:
//!
//! 1. [`enum_table::normalize`] turns caller-supplied symbolic values into the
//!    form the endpoint expects
//! 2. [`endpoint::render`] fills the endpoint's path template and query string
//! 3. [`RequestClient`] sends the request with the right authorization mode and
//!    classifies the response
//!
//! [`OAuthManager`] drives the authorization-code and refresh grants through the
//! same client. Resource modules ([`resources`]) are thin callers of that pipeline
//! and receive their client by injection.

pub mod config;
pub mod endpoint;
pub mod enum_table;
pub mod error;
pub mod logger;
pub mod oauth;
pub mod request_client;
pub mod resources;

#[cfg(test)]
mod tests;

pub use config::PlatformConfig;
pub use endpoint::{EndpointTemplate, ParamMap, render};
pub use enum_table::{CanonicalValue, EnumForm, EnumKey, EnumTable, normalize, resolve};
pub use error::CoreError;
pub use oauth::OAuthManager;
pub use request_client::{ClassifiedResponse, PostBody, RequestClient};
pub use resources::BnetApi;

pub use models::{AppInfo, Credentials, CredentialsBuilder, OAuthToken};

pub const BNET_HOST: &str = "https://www.bungie.net";
pub const BNET_PLATFORM_ROOT: &str = const_format::concatcp!(BNET_HOST, "/Platform");
