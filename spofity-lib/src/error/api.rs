//! API error types

use std::time::Duration;

use super::BackendFieldError;

/// Errors that can occur during API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the backend.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message ready to show to the user.
        message: String,
        /// Per-field validation errors reported by the backend.
        field_errors: Vec<BackendFieldError>,
    },

    /// Network error during API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    /// Creates a new HTTP error carrying backend field errors.
    ///
    /// The message lists every field error on its own line.
    pub fn http_with_fields(status: u16, field_errors: Vec<BackendFieldError>) -> Self {
        let message = field_errors
            .iter()
            .map(BackendFieldError::describe)
            .collect::<Vec<_>>()
            .join("\n");
        Self::Http {
            status,
            message,
            field_errors,
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the backend field errors, if any.
    pub fn field_errors(&self) -> &[BackendFieldError] {
        match self {
            Self::Http { field_errors, .. } => field_errors,
            _ => &[],
        }
    }

    /// Returns `true` if the backend could not be reached at all.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }
}
