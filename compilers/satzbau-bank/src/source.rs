use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BankError, Result};
use crate::record::BankRecord;

/// Anything that can hand over the raw rows of a vocabulary bank.
pub trait BankSource {
    fn records(&self) -> Result<Vec<BankRecord>>;
}

/// A JSON array of rows exported from the document store.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BankSource for JsonFileSource {
    fn records(&self) -> Result<Vec<BankRecord>> {
        let input_data = fs::read_to_string(&self.path)?;
        parse_records(&input_data)
    }
}

/// Rows already in memory, e.g. a fixture bank.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<BankRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<BankRecord>) -> Self {
        Self { records }
    }
}

impl BankSource for InMemorySource {
    fn records(&self) -> Result<Vec<BankRecord>> {
        Ok(self.records.clone())
    }
}

/// Reads a JSON array of rows.
///
/// Each row is decoded on its own: a row whose shape does not fit a
/// [`BankRecord`] (wrong JSON types, not an object) is logged and skipped.
/// Only input that is not a JSON array at all is an error.
pub fn parse_records(json: &str) -> Result<Vec<BankRecord>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(json)?;

    let records = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<BankRecord>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                let err = BankError::MalformedRow {
                    index,
                    reason: e.to_string(),
                };
                log::warn!("{}, skipping...", err);
                None
            }
        })
        .collect();

    Ok(records)
}
