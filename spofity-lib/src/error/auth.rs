//! Authentication error types

/// Errors around the session token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No session token is stored.
    #[error("No se encontró un token de sesión.")]
    MissingSession,

    /// The stored token has expired.
    #[error("Session token expired")]
    TokenExpired,

    /// The token is not a decodable JWT.
    #[error("Malformed session token: {0}")]
    MalformedToken(String),

    /// The session store could not be read or written.
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl From<base64::DecodeError> for AuthError {
    fn from(err: base64::DecodeError) -> Self {
        Self::MalformedToken(err.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedToken(err.to_string())
    }
}
