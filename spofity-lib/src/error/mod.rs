//! Error types

mod api;
mod auth;
mod validation;

pub use api::*;
pub use auth::*;
pub use validation::*;

/// Top-level error returned by [`SpofityClient`](crate::SpofityClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No usable session token.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl Error {
    /// The message to put in front of the user.
    ///
    /// Backend messages are passed through; transport problems collapse to
    /// a generic connection message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(ApiError::Http { message, .. }) => message.clone(),
            Self::Api(ApiError::Network(_)) | Self::Api(ApiError::Timeout(_)) => {
                CONNECTION_ERROR_MESSAGE.to_string()
            }
            Self::Api(other) => other.to_string(),
            Self::Auth(auth) => auth.to_string(),
        }
    }
}

/// Shown when the backend cannot be reached.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Error de conexión. Asegúrate de que el servidor esté disponible.";
