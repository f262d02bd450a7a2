// src/error.rs

use thiserror::Error;

/// Result alias used throughout the calculator.
pub type Result<T> = std::result::Result<T, EoqError>;

/// Every way a calculation request can fail.
///
/// `Parse` and `InvalidInput` are the two user-facing, recoverable cases.
/// The remaining variants come from the output side (files, chart, config).
#[derive(Debug, Error)]
pub enum EoqError {
    /// A field could not be read as a number.
    #[error("Please enter valid numbers! ({field}: {raw:?})")]
    Parse { field: &'static str, raw: String },

    /// A field parsed, but the model is undefined for its value.
    #[error("Please enter positive numbers! ({field} = {value}: {reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EoqError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        EoqError::InvalidInput {
            field,
            value,
            reason,
        }
    }

    /// True for errors caused by what the user typed, as opposed to I/O or rendering.
    pub fn is_user_input(&self) -> bool {
        matches!(self, EoqError::Parse { .. } | EoqError::InvalidInput { .. })
    }

    /// The short message shown in the result area of the form.
    pub fn user_message(&self) -> String {
        match self {
            EoqError::Parse { .. } => "Please enter valid numbers!".to_string(),
            EoqError::InvalidInput { field, .. } => {
                format!("Please enter positive numbers! (check {})", field)
            }
            other => other.to_string(),
        }
    }
}
