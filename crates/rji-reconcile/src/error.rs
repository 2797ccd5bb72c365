use thiserror::Error;

use rji_ingest::StoreError;
use rji_model::ModelError;

/// Failures that abort a reconciliation run.
///
/// Data-quality problems never appear here; they are reported as statuses
/// and observations on the output rows.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("row store: {0}")]
    Store(#[from] StoreError),

    /// A stored reconciliation row could not be decoded.
    #[error("reconciliation row {row}: {source}")]
    InvalidOutputRow {
        row: usize,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
