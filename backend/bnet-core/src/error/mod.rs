//! Error taxonomy for the request core.
//!
//! Local validation failures ([`ArgumentError`], [`EnumError`], [`RenderError`])
//! are raised before any I/O. [`RequestError`] covers everything that happens
//! once a request is on the wire. [`CoreError`] unifies them for callers that
//! only want to branch on the kind.

pub mod argument;
pub mod config;
pub mod enum_lookup;
pub mod oauth;
pub mod registry;
pub mod render;
pub mod request;

pub use argument::ArgumentError;
pub use config::ConfigError;
pub use enum_lookup::EnumError;
pub use oauth::OAuthError;
pub use registry::RegistryError;
pub use render::RenderError;
pub use request::RequestError;

use models::ModelError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Enum(#[from] EnumError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    OAuth(#[from] OAuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CoreError {
    /// Short category name for logs.
    pub fn category(&self) -> &'static str {
        match self {
            CoreError::Argument(_) => "argument",
            CoreError::Enum(_) => "enum",
            CoreError::Render(_) => "render",
            CoreError::Request(RequestError::Remote { .. }) => "remote",
            CoreError::Request(_) => "transport",
            CoreError::OAuth(_) => "oauth",
            CoreError::Config(_) => "config",
            CoreError::Registry(_) => "registry",
            CoreError::Model(_) => "model",
        }
    }

    /// True for errors raised before any network I/O was attempted.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            CoreError::Argument(_)
                | CoreError::Enum(_)
                | CoreError::Render(_)
                | CoreError::Config(_)
                | CoreError::Registry(_)
                | CoreError::Model(_)
        )
    }
}
