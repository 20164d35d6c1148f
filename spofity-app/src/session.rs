//! The stored session token.

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use spofity_lib::auth::AccessToken;
use spofity_lib::auth::TokenClaims;
use spofity_lib::auth::TokenProvider;
use spofity_lib::error::AuthError;

use crate::settings::SettingKey;
use crate::settings::SettingsProvider;

#[derive(Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// Keeps the login token in settings so it survives restarts.
///
/// Doubles as the client's [`TokenProvider`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    settings: SettingsProvider,
}

impl SessionStore {
    pub fn new(settings: SettingsProvider) -> Self {
        Self { settings }
    }

    /// Saves the token returned by login or verification.
    pub async fn save(&self, token: &AccessToken) -> Result<(), AuthError> {
        let stored = StoredToken {
            access_token: token.access_token.clone(),
        };
        self.settings
            .set(SettingKey::SessionToken, &stored)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        log::info!("session token stored");
        Ok(())
    }

    /// The stored token, if any. Expiry is read from the token itself.
    pub async fn token(&self) -> Result<Option<AccessToken>, AuthError> {
        let stored = self
            .settings
            .get::<StoredToken>(SettingKey::SessionToken)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        Ok(stored.map(|s| AccessToken::from_jwt(s.access_token)))
    }

    /// Decoded claims of the stored token.
    ///
    /// `None` when there is no token or it does not decode.
    pub async fn claims(&self) -> Result<Option<TokenClaims>, AuthError> {
        let Some(token) = self.token().await? else {
            return Ok(None);
        };
        match token.claims() {
            Ok(claims) => Ok(Some(claims)),
            Err(e) => {
                log::warn!("stored token does not decode: {}", e);
                Ok(None)
            }
        }
    }

    /// Logout: forgets the token and everything else stored for the user.
    pub async fn clear(&self) -> Result<(), AuthError> {
        self.settings
            .clear_user_data()
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        log::info!("session cleared");
        Ok(())
    }
}

#[async_trait]
impl TokenProvider for SessionStore {
    async fn get_token(&self) -> Result<AccessToken, AuthError> {
        match self.token().await? {
            Some(token) if token.is_expired() => Err(AuthError::TokenExpired),
            Some(token) => Ok(token),
            None => Err(AuthError::MissingSession),
        }
    }
}
