//! Row store backed by a directory of CSV files, one file per dataset.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use rji_model::DatasetTable;

use crate::{Result, RowStore, StoreError, validate_dataset_name};

const DATASET_EXTENSION: &str = "csv";

#[derive(Debug, Clone)]
pub struct CsvRowStore {
    root: PathBuf,
}

impl CsvRowStore {
    /// Opens the store rooted at an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::DirectoryNotFound { path: root });
        }
        Ok(Self { root })
    }

    /// Opens the store, creating the directory first if needed.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dataset_path(&self, name: &str) -> Result<PathBuf> {
        let name = validate_dataset_name(name)?;
        Ok(self.root.join(format!("{name}.{DATASET_EXTENSION}")))
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn read_table(path: &Path, name: &str) -> Result<DatasetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    let mut rows = raw_rows.into_iter();
    let Some(headers) = rows.next() else {
        return Ok(DatasetTable::new(name, Vec::<String>::new()));
    };
    let mut table = DatasetTable::new(name, headers);
    for row in rows {
        table.push_row(row);
    }
    Ok(table)
}

fn write_table(path: &Path, table: &DatasetTable) -> Result<()> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .flexible(false)
        .from_path(path)
        .map_err(write_err)?;
    writer.write_record(&table.columns).map_err(write_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(write_err)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl RowStore for CsvRowStore {
    fn has_dataset(&self, name: &str) -> Result<bool> {
        Ok(self.dataset_path(name)?.is_file())
    }

    fn read_dataset(&self, name: &str) -> Result<DatasetTable> {
        let path = self.dataset_path(name)?;
        if !path.is_file() {
            return Err(StoreError::DatasetNotFound {
                name: name.to_string(),
            });
        }
        let table = read_table(&path, name)?;
        debug!(dataset = %name, rows = table.len(), "read dataset");
        Ok(table)
    }

    fn replace_all_rows(&mut self, table: &DatasetTable) -> Result<()> {
        let path = self.dataset_path(&table.name)?;
        let staging = path.with_extension(format!("{DATASET_EXTENSION}.tmp"));
        if let Err(error) = write_table(&staging, table) {
            if let Err(cleanup) = fs::remove_file(&staging) {
                debug!(path = %staging.display(), %cleanup, "staging file not removed");
            }
            return Err(error);
        }
        fs::rename(&staging, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(dataset = %table.name, rows = table.len(), "replaced dataset");
        Ok(())
    }
}
