//! OAuth authorization-code and refresh-token grants.
//!
//! Token requests go through the shared [`RequestClient`] with Basic
//! authorization built from the client id and secret. The manager holds no
//! tokens; see [`session::UserSession`] for a caller-side holder.

pub mod session;

use crate::endpoint::ParamMap;
use crate::error::argument::require_non_empty;
use crate::error::{OAuthError, RequestError};
use crate::request_client::{PostBody, RequestClient};

use models::OAuthToken;

use std::sync::Arc;

use log::{debug, info};
use serde_json::Value;
use url::form_urlencoded;

const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
const GRANT_REFRESH_TOKEN: &str = "refresh_token";

/// What to refresh: a token record or a bare refresh-token string.
#[derive(Debug, Clone, Copy)]
pub enum RefreshGrant<'a> {
    Token(&'a OAuthToken),
    Raw(&'a str),
}

impl RefreshGrant<'_> {
    pub fn refresh_token(&self) -> &str {
        match self {
            RefreshGrant::Token(token) => &token.refresh_token,
            RefreshGrant::Raw(raw) => raw,
        }
    }
}

impl<'a> From<&'a OAuthToken> for RefreshGrant<'a> {
    fn from(token: &'a OAuthToken) -> Self {
        RefreshGrant::Token(token)
    }
}

impl<'a> From<&'a str> for RefreshGrant<'a> {
    fn from(raw: &'a str) -> Self {
        RefreshGrant::Raw(raw)
    }
}

impl<'a> From<&'a String> for RefreshGrant<'a> {
    fn from(raw: &'a String) -> Self {
        RefreshGrant::Raw(raw.as_str())
    }
}

#[derive(Clone)]
pub struct OAuthManager {
    client: Arc<RequestClient>,
}

impl OAuthManager {
    pub fn new(client: Arc<RequestClient>) -> Self {
        Self { client }
    }

    /// URL to send the user to so they can grant access.
    ///
    /// `state` is echoed back on the redirect and should be checked by the
    /// caller to tie the callback to this request.
    pub fn authorization_url(&self, state: Option<&str>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("response_type", "code")
            .append_pair("client_id", self.client.credentials().client_id());
        if let Some(state) = state.filter(|s| !s.is_empty()) {
            query.append_pair("state", state);
        }
        format!("{}?{}", self.client.config().authorize_url(), query.finish())
    }

    /// Exchange the `code` from the authorization redirect for a token.
    pub async fn request_access_token(&self, code: &str) -> Result<OAuthToken, OAuthError> {
        require_non_empty("code", code)?;

        let form = ParamMap::new()
            .with("grant_type", GRANT_AUTHORIZATION_CODE)
            .with("code", code);

        let token = self.exchange(form).await?;
        info!("Obtained access token for membership {}", token.membership_id);
        Ok(token)
    }

    pub async fn refresh_access_token<'a>(
        &self,
        grant: impl Into<RefreshGrant<'a>>,
    ) -> Result<OAuthToken, OAuthError> {
        let grant = grant.into();
        require_non_empty("refresh_token", grant.refresh_token())?;

        let form = ParamMap::new()
            .with("grant_type", GRANT_REFRESH_TOKEN)
            .with("refresh_token", grant.refresh_token());

        let token = self.exchange(form).await?;
        info!("Refreshed access token for membership {}", token.membership_id);
        Ok(token)
    }

    async fn exchange(&self, form: ParamMap) -> Result<OAuthToken, OAuthError> {
        if self.client.credentials().client_secret().is_none() {
            return Err(OAuthError::missing_client_secret());
        }

        let token_url = self.client.config().token_url();
        debug!("Requesting token from {token_url}");

        let document = match self.client.post(token_url, PostBody::Form(form), None).await {
            Ok(document) => document,
            Err(e) => return Err(rejection(&e).unwrap_or_else(|| e.into())),
        };

        if let Some(error) = document.get("error").and_then(Value::as_str) {
            let description = document
                .get("error_description")
                .and_then(Value::as_str)
                .unwrap_or_default();
            return Err(OAuthError::rejected(error, description));
        }

        Ok(serde_json::from_value(document)?)
    }
}

// Some token-endpoint failures come back without a JSON content type.
fn rejection(error: &RequestError) -> Option<OAuthError> {
    let RequestError::Transport {
        body: Some(body), ..
    } = error
    else {
        return None;
    };
    let document: Value = serde_json::from_str(body).ok()?;
    let error = document.get("error")?.as_str()?;
    let description = document
        .get("error_description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Some(OAuthError::rejected(error, description))
}
