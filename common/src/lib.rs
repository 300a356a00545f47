//! Shared primitives for the Bungie.net client workspace.
//!
//! Nothing in here talks to the network. These are the small value types
//! every other crate leans on:
//!
//! - [`ErrorLocation`]: `file:line:column` captured with `#[track_caller]`
//! - [`RedactedSecret`]: API keys and client secrets that never reach a log
//! - [`HttpStatusCode`]: transport status kept as data, not parsed from text

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
