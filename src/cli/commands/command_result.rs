use std::path::PathBuf;

use crate::core::StatRecord;
use crate::export::ExportSummary;
use crate::fetch::FetchSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Stats(StatsSummary),
    Fetch(FetchSummary),
}

/// Outcome of the `build` and `dashboard` commands.
#[derive(Debug)]
pub struct StatsSummary {
    pub output_dir: PathBuf,
    pub records: Vec<StatRecord>,
    pub files_scanned: usize,
    /// Labels of configured sources whose local directory was missing.
    pub skipped_sources: Vec<String>,
    pub export: ExportSummary,
}

/// Result of running transtat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
