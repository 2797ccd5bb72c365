//! Error types for row-store access.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a row store.
///
/// Schema drift is not an error: missing columns are backfilled on read.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The dataset location does not exist.
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The named dataset does not exist in the store.
    #[error("dataset not found: {name}")]
    DatasetNotFound { name: String },

    /// Dataset names become file names, so separators are refused.
    #[error("invalid dataset name '{name}'")]
    InvalidDatasetName { name: String },

    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write dataset {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No row matched the key given to a keyed update.
    #[error("no row with {column}={key} in {dataset}")]
    KeyNotFound {
        dataset: String,
        column: String,
        key: String,
    },
}

/// Result type for row-store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::KeyNotFound {
            dataset: "PARTICIPANTES".to_string(),
            column: "documento_participante".to_string(),
            key: "123".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no row with documento_participante=123 in PARTICIPANTES"
        );
    }
}
