//! TokenProvider trait and AccessToken

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use super::TokenClaims;
use super::decode_claims;
use crate::error::AuthError;

/// A session token handed out by the backend on login.
///
/// The backend issues a JWT. When the payload carries an `exp` claim the
/// expiry is read from it; the signature is never checked on the client.
#[derive(Clone)]
pub struct AccessToken {
    /// The bearer token used for API authentication.
    pub access_token: String,
    /// When the token expires, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a new access token with just the token string.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Creates a token and fills in the expiry from the JWT `exp` claim.
    ///
    /// Tokens whose payload cannot be decoded are kept without an expiry.
    pub fn from_jwt(access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        let expires_at = decode_claims(&access_token)
            .ok()
            .and_then(|claims| claims.expires_at());
        Self {
            access_token,
            expires_at,
        }
    }

    /// Returns `true` if the token has expired.
    ///
    /// Returns `false` if expiration time is unknown.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Utc::now() >= exp)
    }

    /// Decode the JWT payload for display.
    pub fn claims(&self) -> Result<TokenClaims, AuthError> {
        decode_claims(&self.access_token)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Trait for providing the session token to the client.
///
/// The client calls `get_token` before each authenticated request.
/// Implementations decide where the token lives (memory, disk) and report
/// [`AuthError::MissingSession`] when there is none.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Gets the current session token.
    async fn get_token(&self) -> Result<AccessToken, AuthError>;
}

/// A simple token provider that always returns the same static token.
///
/// Useful for testing or for scripts that already hold a token.
///
/// # Example
///
/// ```
/// use spofity_lib::auth::StaticTokenProvider;
///
/// let provider = StaticTokenProvider::new("my-access-token");
/// ```
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: AccessToken,
}

impl StaticTokenProvider {
    /// Creates a new static token provider with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            token: AccessToken::new(access_token),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn get_token(&self) -> Result<AccessToken, AuthError> {
        Ok(self.token.clone())
    }
}
