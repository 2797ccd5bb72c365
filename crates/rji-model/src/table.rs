use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named dataset held as a header plus string rows.
///
/// Every row has exactly `columns.len()` cells once it has gone through
/// [`DatasetTable::push_row`] or [`DatasetTable::conform_to`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DatasetTable {
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Appends a row built from a column-to-value map; unknown keys are ignored.
    pub fn push_values(&mut self, values: &BTreeMap<String, String>) {
        let row = self
            .columns
            .iter()
            .map(|column| values.get(column).cloned().unwrap_or_default())
            .collect();
        self.rows.push(row);
    }

    /// Adds an empty column at the end if it is not already present.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.columns.len() - 1
    }

    /// Reshapes the table to exactly `expected`, in that order.
    ///
    /// Missing columns are backfilled with empty strings and extra columns are
    /// dropped. Returns the names that had to be backfilled.
    pub fn conform_to(&mut self, expected: &[&str]) -> Vec<String> {
        let sources: Vec<Option<usize>> = expected
            .iter()
            .map(|column| self.column_index(column))
            .collect();
        let backfilled = expected
            .iter()
            .zip(&sources)
            .filter(|(_, source)| source.is_none())
            .map(|(column, _)| (*column).to_string())
            .collect();
        let rows = std::mem::take(&mut self.rows);
        self.rows = rows
            .into_iter()
            .map(|row| {
                sources
                    .iter()
                    .map(|source| {
                        source
                            .and_then(|index| row.get(index))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        self.columns = expected.iter().map(|column| (*column).to_string()).collect();
        backfilled
    }

    /// Reshapes the table to `expected` followed by any other stored columns.
    ///
    /// Unlike [`DatasetTable::conform_to`] nothing is dropped: columns outside
    /// `expected` keep their stored order after it. Returns the backfilled
    /// names.
    pub fn conform_keeping_extra(&mut self, expected: &[&str]) -> Vec<String> {
        let mut extra: Vec<String> = Vec::new();
        for column in &self.columns {
            if !expected.contains(&column.as_str()) && !extra.contains(column) {
                extra.push(column.clone());
            }
        }
        let mut layout: Vec<&str> = expected.to_vec();
        layout.extend(extra.iter().map(String::as_str));
        self.conform_to(&layout)
    }

    pub fn records(&self) -> impl Iterator<Item = RecordRef<'_>> {
        self.rows.iter().map(|cells| RecordRef {
            columns: &self.columns,
            cells,
        })
    }
}

/// Borrowed view of one row with lookup by column name.
#[derive(Debug, Clone, Copy)]
pub struct RecordRef<'a> {
    columns: &'a [String],
    cells: &'a [String],
}

impl<'a> RecordRef<'a> {
    /// Cell value for `column`, or `""` when the column or cell is absent.
    pub fn get(&self, column: &str) -> &'a str {
        self.columns
            .iter()
            .position(|name| name == column)
            .and_then(|index| self.cells.get(index))
            .map_or("", String::as_str)
    }

    pub fn cells(&self) -> &'a [String] {
        self.cells
    }
}
