use thiserror::Error;

use crate::settings::SettingsError;

/// Failures that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("cannot create API client: {0}")]
    Client(#[from] artic_lib::Error),
}
