//! Parsing of `--field column=value` submission arguments.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

/// Parses `column=value` pairs into a map, trimming both sides.
///
/// Every column must be one of `allowed`. A repeated column keeps the last
/// value.
pub fn parse_fields(raw: &[String], allowed: &[&str]) -> Result<BTreeMap<String, String>> {
    let mut values = BTreeMap::new();
    for item in raw {
        let Some((column, value)) = item.split_once('=') else {
            bail!("expected column=value, got '{item}'");
        };
        let column = column.trim();
        if !allowed.contains(&column) {
            bail!("unknown column '{column}'");
        }
        values.insert(column.to_string(), value.trim().to_string());
    }
    Ok(values)
}
