use crate::error::OAuthError;
use crate::oauth::OAuthManager;

use models::OAuthToken;

use log::warn;

/// A caller-held login state.
///
/// There is no intermediate "refreshing" state and no locking: a session is
/// owned by one task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserSession {
    #[default]
    Unauthenticated,
    Authorized(OAuthToken),
}

impl UserSession {
    pub fn token(&self) -> Option<&OAuthToken> {
        match self {
            UserSession::Authorized(token) => Some(token),
            UserSession::Unauthenticated => None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, UserSession::Authorized(_))
    }

    pub async fn authorize(
        &mut self,
        manager: &OAuthManager,
        code: &str,
    ) -> Result<&OAuthToken, OAuthError> {
        let token = manager.request_access_token(code).await?;
        *self = UserSession::Authorized(token);
        self.token().ok_or_else(OAuthError::not_authorized)
    }

    /// Replace the token with a fresh one.
    ///
    /// A rejection from the token endpoint means the refresh token is dead,
    /// so the session is signed out. Transport, remote and local failures
    /// keep the current token for a later retry.
    pub async fn refresh(&mut self, manager: &OAuthManager) -> Result<&OAuthToken, OAuthError> {
        let UserSession::Authorized(current) = &*self else {
            return Err(OAuthError::not_authorized());
        };

        let refreshed = manager.refresh_access_token(current).await;
        match refreshed {
            Ok(token) => {
                *self = UserSession::Authorized(token);
                self.token().ok_or_else(OAuthError::not_authorized)
            }
            Err(e @ OAuthError::Rejected { .. }) => {
                warn!("Refresh token rejected, session signed out: {e}");
                self.sign_out();
                Err(e)
            }
            Err(e) => {
                warn!("Token refresh failed, keeping current token: {e}");
                Err(e)
            }
        }
    }

    pub fn sign_out(&mut self) {
        *self = UserSession::Unauthenticated;
    }
}
