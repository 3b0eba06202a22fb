use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("Unable to determine the home directory")]
    HomeDirUnavailable,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Settings file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("No API key configured in {}", .0.display())]
    MissingApiKey(PathBuf),

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl InstallerError {
    /// Whether this error means "run the full wizard first" rather than a crash
    pub fn is_missing_setup(&self) -> bool {
        matches!(
            self,
            InstallerError::ConfigNotFound(_) | InstallerError::MissingApiKey(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, InstallerError>;
