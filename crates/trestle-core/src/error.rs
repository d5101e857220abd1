//! Error types module
//!
//! The whole pipeline reports through the unified [`AppError`]: decode,
//! validation, and gatekeeper failures recover into 400 responses with a
//! field-level error map; storage, datastore, and configuration failures
//! abort the request with a 500. Relay failures never appear here - they are
//! reflected only in the `sheetsUpdated` flag.

use crate::forms::FieldErrors;

/// Log level for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors like validation failures.
    Debug,
    /// Unexpected failures from external collaborators.
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Decode(String),

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Rejected file attachments: {}", .0.field_names())]
    FileRejected(FieldErrors),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Server configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON serialization error: {}", err))
    }
}

impl AppError {
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::Decode(_) | AppError::Validation(_) | AppError::FileRejected(_) => 400,
            AppError::Storage(_)
            | AppError::Database(_)
            | AppError::Config(_)
            | AppError::Internal(_) => 500,
        }
    }

    /// Human-readable message for the response envelope.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Decode(msg) => msg.clone(),
            AppError::Validation(_) => "Validation failed".to_string(),
            AppError::FileRejected(errors) => {
                format!("Rejected file attachments: {}", errors.field_names())
            }
            AppError::Storage(_) => "Failed to upload attached files".to_string(),
            AppError::Database(_) => "Failed to save submission to database".to_string(),
            AppError::Config(msg) => format!("Server configuration error: {}", msg),
            AppError::Internal(_) => "An unexpected error occurred".to_string(),
        }
    }

    /// Technical detail carried alongside 500 responses for log correlation.
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::Storage(msg) | AppError::Database(msg) | AppError::Internal(msg) => {
                Some(msg.clone())
            }
            _ => None,
        }
    }

    /// The structured per-field violation map, for 400 responses.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) | AppError::FileRejected(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::Decode(_) | AppError::Validation(_) | AppError::FileRejected(_) => {
                LogLevel::Debug
            }
            AppError::Storage(_)
            | AppError::Database(_)
            | AppError::Config(_)
            | AppError::Internal(_) => LogLevel::Error,
        }
    }
}
