//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for leadmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required input column is absent. Fatal: the scorer that needs
    /// it cannot run at all.
    #[error("missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A cell failed to parse into the expected type.
    #[error("invalid value in column '{column}' at row {row}: {message}")]
    InvalidCell {
        column: String,
        row: usize,
        message: String,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// CSV-level errors (malformed quoting, uneven rows)
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for leadmap operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a missing-column error for an input file.
    pub fn missing_column(column: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::MissingColumn {
            column: column.into(),
            path: path.into(),
        }
    }

    /// Create a cell parse error.
    pub fn invalid_cell(
        column: impl Into<String>,
        row: usize,
        message: impl Into<String>,
    ) -> Self {
        Error::InvalidCell {
            column: column.into(),
            row,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_names_the_column() {
        let err = Error::missing_column("customer_date", "leads.csv");
        let msg = err.to_string();
        assert!(msg.contains("customer_date"));
        assert!(msg.contains("leads.csv"));
    }
}
