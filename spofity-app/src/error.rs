//! Application error type.

use spofity_lib::error::{ApiError, AuthError};
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not determine a data directory for this platform")]
    NoDataDir,
}
