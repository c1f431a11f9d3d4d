use thiserror::Error;

/// All the ways things can go wrong in the site state
///
/// Almost everything here is a local, in-memory mutation, so the list is
/// short. Validation messages are the exact text shown to the admin.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// True for the blocking form-validation failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
