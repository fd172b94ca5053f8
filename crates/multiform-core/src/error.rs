//! Error types for multiform-core
//!
//! `CoreError` covers misuse of the form API and IO at the edges. User-facing
//! validation failures are not errors in this sense: they are reported through
//! [`ValidationReport`](crate::validation::ValidationReport).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for multiform operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Field Addressing
    // ===================
    #[error("Unknown field: {path}")]
    UnknownField { path: String },

    #[error("Field {field} expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Index {index} out of range for {field} (len {len})")]
    IndexOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },

    #[error("Day plans are only available while isCheck is set")]
    DaysUnavailable,

    #[error("Day entry no longer exists")]
    DayNotFound,

    // ===================
    // Date-Time Selection
    // ===================
    #[error("Invalid time unit: {unit} (expected hour, minute or second)")]
    InvalidTimeUnit { unit: String },

    #[error("Invalid {unit} value: {value}")]
    InvalidTimeValue { unit: &'static str, value: String },

    #[error("Value {value} out of range for {unit} (0..={max})")]
    TimeComponentOutOfRange {
        unit: &'static str,
        value: u32,
        max: u32,
    },

    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    /// Short actionable hint for CLI output, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileRead { path, .. } => {
                Some(format!("Check the file exists and is readable: {}", path.display()))
            }
            CoreError::JsonParse { .. } => {
                Some("Validate JSON syntax with: jq . <file>".to_string())
            }
            CoreError::UnknownField { .. } => Some(
                "Known fields: email, mode, phoneNumber, isCheck, days, start_date".to_string(),
            ),
            _ => None,
        }
    }
}
