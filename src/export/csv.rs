use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::StatRecord;

/// Writes one header row plus one row per record.
///
/// Columns follow the field order of [`StatRecord`], the same as the JSON
/// export. Nothing is written for an empty record set; a file left over from
/// an earlier run is removed instead. Returns whether a file was written.
pub fn write_csv(records: &[StatRecord], path: &Path) -> Result<bool> {
    if records.is_empty() {
        if path.exists() {
            debug!("Removing stale {}", path.display());
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove stale CSV file: {:?}", path))?;
        }
        return Ok(false);
    }

    let mut writer = ::csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {:?}", path))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to write CSV row to {:?}", path))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV file: {:?}", path))?;

    Ok(true)
}
