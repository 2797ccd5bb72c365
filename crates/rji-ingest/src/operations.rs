//! Store operations built on the two row-store primitives.
//!
//! Each operation is a read followed by a full replace, so it inherits the
//! store's last-writer-wins behavior.

use std::collections::BTreeMap;

use tracing::{debug, info};

use rji_model::{DatasetKind, DatasetNames, DatasetTable, normalize_identifier};

use crate::{Result, RowStore, StoreError};

fn read_keeping_extra<S: RowStore + ?Sized>(
    store: &S,
    dataset: &str,
    expected_columns: &[&str],
) -> Result<DatasetTable> {
    let mut table = store.read_dataset(dataset)?;
    let backfilled = table.conform_keeping_extra(expected_columns);
    if !backfilled.is_empty() {
        debug!(dataset = %dataset, columns = %backfilled.join(","), "backfilled missing columns");
    }
    Ok(table)
}

/// Creates any of the three datasets that do not exist yet, header only.
///
/// Existing datasets are left untouched. Returns the names created.
pub fn ensure_datasets<S: RowStore + ?Sized>(
    store: &mut S,
    names: &DatasetNames,
) -> Result<Vec<String>> {
    let mut created = Vec::new();
    for kind in DatasetKind::ALL {
        let name = names.name(kind);
        if store.has_dataset(name)? {
            continue;
        }
        let table = DatasetTable::new(name, kind.columns().iter().copied());
        store.replace_all_rows(&table)?;
        info!(dataset = %name, kind = %kind, "created dataset");
        created.push(name.to_string());
    }
    Ok(created)
}

/// Appends one row to `dataset` and returns the new row count.
///
/// The stored data is conformed to `expected_columns` first, keeping any
/// further stored columns after them. `values` keys that match no column
/// are ignored.
pub fn append_row<S: RowStore + ?Sized>(
    store: &mut S,
    dataset: &str,
    expected_columns: &[&str],
    values: &BTreeMap<String, String>,
) -> Result<usize> {
    let mut table = read_keeping_extra(&*store, dataset, expected_columns)?;
    table.push_values(values);
    store.replace_all_rows(&table)?;
    debug!(dataset = %dataset, rows = table.len(), "appended row");
    Ok(table.len())
}

/// Sets `value_column` on every row whose `key_column` matches `key`.
///
/// Keys are compared after whitespace normalization. The value column is
/// added when missing and columns written by earlier calls are kept.
/// Returns the number of rows updated.
pub fn set_value_by_key<S: RowStore + ?Sized>(
    store: &mut S,
    dataset: &str,
    expected_columns: &[&str],
    key_column: &str,
    key: &str,
    value_column: &str,
    value: &str,
) -> Result<usize> {
    let mut table = read_keeping_extra(&*store, dataset, expected_columns)?;
    let value_index = table.ensure_column(value_column);
    let key_index = table.column_index(key_column);
    let wanted = normalize_identifier(key);
    let mut updated = 0usize;
    if let Some(key_index) = key_index {
        for row in &mut table.rows {
            let matches = row
                .get(key_index)
                .is_some_and(|cell| normalize_identifier(cell) == wanted);
            if matches {
                row[value_index] = value.to_string();
                updated += 1;
            }
        }
    }
    if updated == 0 {
        return Err(StoreError::KeyNotFound {
            dataset: dataset.to_string(),
            column: key_column.to_string(),
            key: key.to_string(),
        });
    }
    store.replace_all_rows(&table)?;
    debug!(dataset = %dataset, updated, "set value by key");
    Ok(updated)
}
