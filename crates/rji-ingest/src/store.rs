use tracing::warn;

use rji_model::DatasetTable;

use crate::{Result, StoreError};

/// Narrow interface to the shared tabular store.
///
/// Implementations make no transactional promise across calls. A read
/// followed by a replace can lose a write made in between, and two replaces
/// of the same dataset resolve as last-writer-wins.
pub trait RowStore {
    /// Returns true when the named dataset exists.
    fn has_dataset(&self, name: &str) -> Result<bool>;

    /// Reads every row of `name` with the columns exactly as stored.
    fn read_dataset(&self, name: &str) -> Result<DatasetTable>;

    /// Reads every row of `name` shaped to exactly `expected_columns`.
    ///
    /// Columns absent from the stored data are backfilled with empty strings
    /// and columns not listed are dropped.
    fn fetch_all_rows(&self, name: &str, expected_columns: &[&str]) -> Result<DatasetTable> {
        let mut table = self.read_dataset(name)?;
        let backfilled = table.conform_to(expected_columns);
        if !backfilled.is_empty() {
            warn!(
                dataset = %name,
                columns = %backfilled.join(","),
                "backfilled missing columns"
            );
        }
        Ok(table)
    }

    /// Overwrites the header and all rows of the dataset named `table.name`.
    ///
    /// Last-writer-wins: nothing detects a concurrent replace.
    fn replace_all_rows(&mut self, table: &DatasetTable) -> Result<()>;
}

/// Checks a dataset name and returns it trimmed.
///
/// Names must be non-empty and free of path separators, and may not be `.`
/// or `..`, whatever the backing store.
pub fn validate_dataset_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(StoreError::InvalidDatasetName {
            name: name.to_string(),
        });
    }
    Ok(trimmed)
}
