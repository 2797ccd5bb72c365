//! Row-store adapter for the registration datasets.
//!
//! A row store holds named tabular datasets and supports two primitives:
//! fetching every row conformed to an expected column list, and replacing a
//! dataset wholesale. There is no locking and no transaction spanning several
//! calls; concurrent writers race and the last replace wins.

pub mod csv_store;
pub mod error;
pub mod memory;
pub mod operations;
pub mod store;

pub use csv_store::CsvRowStore;
pub use error::{Result, StoreError};
pub use memory::MemoryRowStore;
pub use operations::{append_row, ensure_datasets, set_value_by_key};
pub use store::{RowStore, validate_dataset_name};
