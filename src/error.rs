//! Error types for the Mockview application
//!
//! The navigation and interview state machines are total and never produce
//! these. Errors only come from the edges: configuration files, attachment
//! inspection and result export.

use thiserror::Error;

/// Mockview application errors
#[derive(Error, Debug, Clone)]
pub enum MockviewError {
    /// Configuration file could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File system I/O error
    #[error("IO error: {0}")]
    IOError(String),

    /// Attachment rejected (type or size)
    #[error("Attachment error: {0}")]
    AttachmentError(String),

    /// Serialization of an interview result failed
    #[error("Export error: {0}")]
    ExportError(String),
}

impl From<std::io::Error> for MockviewError {
    fn from(e: std::io::Error) -> Self {
        MockviewError::IOError(e.to_string())
    }
}

impl From<toml::de::Error> for MockviewError {
    fn from(e: toml::de::Error) -> Self {
        MockviewError::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for MockviewError {
    fn from(e: serde_json::Error) -> Self {
        MockviewError::ExportError(e.to_string())
    }
}

impl MockviewError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors are shown as a notice and the user can retry;
    /// the rest stop startup or need the user to fix a file.
    pub fn is_recoverable(&self) -> bool {
        match self {
            MockviewError::ConfigError(_) => false,
            MockviewError::IOError(_) => false,
            // The user can pick another file
            MockviewError::AttachmentError(_) => true,
            MockviewError::ExportError(_) => true,
        }
    }

    /// Get a user-friendly description of the error
    pub fn user_message(&self) -> String {
        match self {
            MockviewError::ConfigError(_) => {
                "Configuration error. Please check config.toml.".to_string()
            }
            MockviewError::IOError(_) => "File system error occurred.".to_string(),
            MockviewError::AttachmentError(reason) => reason.clone(),
            MockviewError::ExportError(_) => {
                "Could not export the interview result.".to_string()
            }
        }
    }
}

/// Result type alias for Mockview operations
pub type Result<T> = std::result::Result<T, MockviewError>;
