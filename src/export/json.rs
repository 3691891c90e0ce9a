use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::core::StatRecord;

/// Format of the `generated_at` field, e.g. `2026-10-16 09:46 UTC`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Structured output of a multi-source build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsDocument {
    pub generated_at: String,
    pub records: Vec<StatRecord>,
}

impl StatsDocument {
    pub fn new(records: Vec<StatRecord>, now: DateTime<Utc>) -> Self {
        Self {
            generated_at: format_timestamp(now),
            records,
        }
    }
}

pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Writes `{ "generated_at": ..., "records": [...] }` with 2-space indentation.
pub fn write_document(document: &StatsDocument, path: &Path) -> Result<()> {
    write_pretty(document, path)
}

/// Writes the records as a plain JSON list.
pub fn write_records(records: &[StatRecord], path: &Path) -> Result<()> {
    write_pretty(&records, path)
}

pub fn read_document(path: &Path) -> Result<StatsDocument> {
    read_json(path)
}

pub fn read_records(path: &Path) -> Result<Vec<StatRecord>> {
    read_json(path)
}

fn write_pretty<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize records for {:?}", path))?;
    fs::write(path, json).with_context(|| format!("Failed to write JSON file: {:?}", path))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON file: {:?}", path))
}
