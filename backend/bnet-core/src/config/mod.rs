//! Platform URLs and credential loading.

use crate::error::ConfigError;
use crate::{BNET_HOST, BNET_PLATFORM_ROOT};

use models::{Credentials, CredentialsBuilder};

use std::env;
use std::path::PathBuf;

use const_format::concatcp;
use log::{debug, info, warn};
use url::Url;

pub const BNET_AUTHORIZE_URL: &str = concatcp!(BNET_HOST, "/en/OAuth/Authorize");
pub const BNET_TOKEN_URL: &str = concatcp!(BNET_PLATFORM_ROOT, "/App/OAuth/token/");

pub const API_KEY_VAR: &str = "BNET_API_KEY";
pub const CLIENT_ID_VAR: &str = "BNET_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "BNET_CLIENT_SECRET";
pub const USER_AGENT_VAR: &str = "BNET_USER_AGENT";
/// Optional override of the platform host, e.g. a local mock.
pub const HOST_VAR: &str = "BNET_HOST";

const AUTHORIZE_PATH: &str = "/en/OAuth/Authorize";
const PLATFORM_PATH: &str = "/Platform";
const TOKEN_PATH: &str = "/Platform/App/OAuth/token/";

/// Where requests are sent.
///
/// Defaults to production. Every URL is checked when it is set, so the
/// stored strings are always absolute http(s) URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    root_path: String,
    authorize_url: String,
    token_url: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            root_path: BNET_PLATFORM_ROOT.to_string(),
            authorize_url: BNET_AUTHORIZE_URL.to_string(),
            token_url: BNET_TOKEN_URL.to_string(),
        }
    }
}

impl PlatformConfig {
    /// Same layout as production, on another host.
    pub fn for_host(host: &str) -> Result<Self, ConfigError> {
        let host = checked_url("host", host)?;
        let host = host.trim_end_matches('/');
        Ok(Self {
            root_path: format!("{host}{PLATFORM_PATH}"),
            authorize_url: format!("{host}{AUTHORIZE_PATH}"),
            token_url: format!("{host}{TOKEN_PATH}"),
        })
    }

    pub fn with_root_path(mut self, root_path: &str) -> Result<Self, ConfigError> {
        self.root_path = checked_url("root_path", root_path)?
            .trim_end_matches('/')
            .to_string();
        Ok(self)
    }

    pub fn with_authorize_url(mut self, authorize_url: &str) -> Result<Self, ConfigError> {
        self.authorize_url = checked_url("authorize_url", authorize_url)?;
        Ok(self)
    }

    pub fn with_token_url(mut self, token_url: &str) -> Result<Self, ConfigError> {
        self.token_url = checked_url("token_url", token_url)?;
        Ok(self)
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    pub fn authorize_url(&self) -> &str {
        &self.authorize_url
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

#[track_caller]
fn checked_url(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    let url = Url::parse(trimmed).map_err(|e| ConfigError::invalid_url(name, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid_url(
            name,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(trimmed.to_string())
}

/// Load credentials from the environment, reading `.env` first if present.
pub fn load_credentials() -> Result<Credentials, ConfigError> {
    if try_load_dotenv().is_none() {
        debug!("No .env file found - reading process environment only");
    }
    credentials_from_lookup(|name| env::var(name).ok())
}

/// Platform config from the environment; production unless `BNET_HOST` is set.
pub fn load_platform_config() -> Result<PlatformConfig, ConfigError> {
    platform_from_lookup(|name| env::var(name).ok())
}

/// Build credentials from any variable source.
pub fn credentials_from_lookup<F>(lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());

    let api_key = read(API_KEY_VAR).ok_or_else(|| ConfigError::missing_variable(API_KEY_VAR))?;
    let client_id =
        read(CLIENT_ID_VAR).ok_or_else(|| ConfigError::missing_variable(CLIENT_ID_VAR))?;

    let mut builder = CredentialsBuilder::default()
        .with_api_key(api_key)
        .with_client_id(client_id);

    if let Some(secret) = read(CLIENT_SECRET_VAR) {
        builder = builder.with_client_secret(secret);
    }
    if let Some(user_agent) = read(USER_AGENT_VAR) {
        builder = builder.with_user_agent(user_agent);
    }

    let credentials = builder.build()?;
    info!(
        "Loaded credentials for client {} (secret {})",
        credentials.client_id(),
        if credentials.client_secret().is_some() { "present" } else { "absent" }
    );
    Ok(credentials)
}

pub fn platform_from_lookup<F>(lookup: F) -> Result<PlatformConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(HOST_VAR).filter(|value| !value.trim().is_empty()) {
        Some(host) => {
            info!("Using platform host override: {host}");
            PlatformConfig::for_host(&host)
        }
        None => Ok(PlatformConfig::default()),
    }
}

fn try_load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {path:?}");
        return Some(path);
    }

    let exe_dir = env::current_exe().ok()?.parent()?.to_path_buf();
    let env_path = exe_dir.join(".env");
    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => {
            info!("Loaded .env from: {env_path:?}");
            Some(env_path)
        }
        Err(e) => {
            warn!("Failed to parse .env at {env_path:?}: {e}");
            None
        }
    }
}
