//! Application credentials shared by every request.

pub mod builder;

use common::RedactedSecret;

const UNKNOWN_FIELD: &str = "N/A";
const LIBRARY_NAME: &str = "bnet";

/// Identity of the application embedded in the default user agent.
///
/// The platform asks every application to identify itself as
/// `AppName/Version AppId/appIdNum (+webUrl;contactEmail)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub homepage: String,
    pub contact: String,
}

impl AppInfo {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        homepage: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            homepage: homepage.into(),
            contact: contact.into(),
        }
    }

    /// Render the user agent for the given OAuth client id.
    pub fn user_agent(&self, client_id: &str) -> String {
        format!(
            "{}/{} AppId/{} (+{};{})",
            or_unknown(&self.name),
            or_unknown(&self.version),
            client_id,
            or_unknown(&self.homepage),
            or_unknown(&self.contact),
        )
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: LIBRARY_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            homepage: env!("CARGO_PKG_HOMEPAGE").to_string(),
            contact: String::new(),
        }
    }
}

fn or_unknown(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN_FIELD
    } else {
        trimmed
    }
}

/// Validated application credentials.
///
/// Immutable once built. Share it behind an `Arc` for the lifetime of the
/// process; every resource module and the request client read from the same
/// instance.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub(crate) api_key: RedactedSecret,
    pub(crate) client_id: String,
    pub(crate) client_secret: Option<RedactedSecret>,
    pub(crate) user_agent: String,
}

impl Credentials {
    pub fn builder() -> builder::CredentialsBuilder {
        builder::CredentialsBuilder::default()
    }

    pub fn api_key(&self) -> &RedactedSecret {
        &self.api_key
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Only needed for OAuth flows and Basic-authorized calls.
    pub fn client_secret(&self) -> Option<&RedactedSecret> {
        self.client_secret.as_ref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
