//! Domain error types for picksheet
//!
//! The widget itself never fails: bad input degrades to a default visual.
//! Errors only surface at the crate boundary:
//! - sheet registration (duplicate identifiers)
//! - configuration loading
//! - demo data loading

use thiserror::Error;

use crate::sheet::SheetId;

/// Top-level error type for picksheet
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Sheet '{0}' is already registered")]
    DuplicateSheet(SheetId),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid data set: {0}")]
    Data(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

impl From<toml::de::Error> for PickerError {
    fn from(err: toml::de::Error) -> Self {
        PickerError::Config(err.to_string())
    }
}

// Conversion from anyhow::Error for callers mixing both styles
impl From<anyhow::Error> for PickerError {
    fn from(err: anyhow::Error) -> Self {
        PickerError::Other(err.to_string())
    }
}

impl From<String> for PickerError {
    fn from(msg: String) -> Self {
        PickerError::Other(msg)
    }
}

impl From<&str> for PickerError {
    fn from(msg: &str) -> Self {
        PickerError::Other(msg.to_string())
    }
}
