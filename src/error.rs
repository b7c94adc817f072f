// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConnectorError>;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("missing {key}")]
    MissingRequiredField { key: String },

    #[error("files has an empty entry at position {position}")]
    EmptyFileEntry { position: usize },

    #[error("{key} has to be one of [{}], got '{value}'", .allowed.join(", "))]
    InvalidEnumValue {
        key: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Connector has not been started")]
    NotStarted,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ConnectorError {
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequiredField { key: key.into() }
    }

    /// True for errors caused by an absent or blank required value,
    /// including blank entries inside the file list.
    pub fn is_missing_field(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredField { .. } | Self::EmptyFileEntry { .. }
        )
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
