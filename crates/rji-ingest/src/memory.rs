use std::collections::BTreeMap;

use rji_model::DatasetTable;

use crate::{Result, RowStore, StoreError, validate_dataset_name};

/// In-process row store, used for tests and dry runs.
///
/// Dataset names go through the same check as [`crate::CsvRowStore`], so a
/// `DatasetNames` that works here works on disk too.
#[derive(Debug, Clone, Default)]
pub struct MemoryRowStore {
    datasets: BTreeMap<String, DatasetTable>,
}

impl MemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a dataset; the table name is trimmed like any other lookup.
    #[must_use]
    pub fn with_dataset(mut self, mut table: DatasetTable) -> Self {
        table.name = table.name.trim().to_string();
        self.datasets.insert(table.name.clone(), table);
        self
    }

    pub fn dataset(&self, name: &str) -> Option<&DatasetTable> {
        self.datasets.get(name.trim())
    }
}

impl RowStore for MemoryRowStore {
    fn has_dataset(&self, name: &str) -> Result<bool> {
        Ok(self.datasets.contains_key(validate_dataset_name(name)?))
    }

    fn read_dataset(&self, name: &str) -> Result<DatasetTable> {
        self.datasets
            .get(validate_dataset_name(name)?)
            .cloned()
            .ok_or_else(|| StoreError::DatasetNotFound {
                name: name.to_string(),
            })
    }

    fn replace_all_rows(&mut self, table: &DatasetTable) -> Result<()> {
        let name = validate_dataset_name(&table.name)?.to_string();
        let mut stored = table.clone();
        stored.name.clone_from(&name);
        self.datasets.insert(name, stored);
        Ok(())
    }
}
