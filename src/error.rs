use crate::domain::political::UnknownVariant;
use thiserror::Error;

/// Pulse Seer application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid_input(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Unknown vocabulary value supplied for `field`
    pub fn unknown_variant(field: impl Into<String>, source: UnknownVariant) -> Self {
        Self::invalid_input(field, source)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
