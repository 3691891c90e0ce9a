//! Writers for the aggregated records.
//!
//! ## Module Structure
//!
//! - `json`: Structured export (flat list or timestamped document)
//! - `csv`: Flat tabular export
//! - `report`: Static HTML dashboard behind the `ReportRenderer` trait

pub mod csv;
pub mod json;
pub mod report;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::StatRecord;
use json::StatsDocument;
use report::{Download, ReportPage, ReportRenderer};

pub const JSON_FILE_NAME: &str = "stats.json";
pub const CSV_FILE_NAME: &str = "stats.csv";
pub const REPORT_FILE_NAME: &str = "index.html";

pub const DEFAULT_REPORT_TITLE: &str = "Translation Coverage by Language";

/// How the records of one run are written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// When set, the JSON file is a `{ generated_at, records }` document
    /// instead of a flat list.
    pub generated_at: Option<String>,
    pub title: String,
    /// Render `index.html` next to the data files.
    pub report: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            generated_at: None,
            title: DEFAULT_REPORT_TITLE.to_string(),
            report: true,
        }
    }
}

/// Files written by [`export_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub json_path: PathBuf,
    /// `None` when there were no records.
    pub csv_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
}

impl ExportSummary {
    pub fn written_files(&self) -> Vec<&Path> {
        let mut files = vec![self.json_path.as_path()];
        files.extend(self.csv_path.as_deref());
        files.extend(self.report_path.as_deref());
        files
    }
}

/// Writes JSON, CSV and (optionally) the HTML report into `output_dir`.
///
/// The directory is created if needed; existing files are overwritten.
pub fn export_all(
    records: &[StatRecord],
    output_dir: &Path,
    options: &ExportOptions,
    renderer: &dyn ReportRenderer,
) -> Result<ExportSummary> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let json_path = output_dir.join(JSON_FILE_NAME);
    match &options.generated_at {
        Some(generated_at) => {
            let document = StatsDocument {
                generated_at: generated_at.clone(),
                records: records.to_vec(),
            };
            json::write_document(&document, &json_path)?;
        }
        None => json::write_records(records, &json_path)?,
    }
    debug!("Wrote {}", json_path.display());

    let csv_path = output_dir.join(CSV_FILE_NAME);
    let csv_path = if csv::write_csv(records, &csv_path)? {
        debug!("Wrote {}", csv_path.display());
        Some(csv_path)
    } else {
        None
    };

    let report_path = if options.report {
        let mut downloads = vec![Download::new("JSON", JSON_FILE_NAME)];
        if csv_path.is_some() {
            downloads.push(Download::new("CSV", CSV_FILE_NAME));
        }
        let page = ReportPage {
            title: &options.title,
            generated_at: options.generated_at.as_deref(),
            records,
            downloads,
        };
        let path = output_dir.join(REPORT_FILE_NAME);
        let html = renderer.render(&page)?;
        fs::write(&path, html).with_context(|| format!("Failed to write report: {:?}", path))?;
        debug!("Wrote {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(ExportSummary {
        json_path,
        csv_path,
        report_path,
    })
}
