use anyhow::Result;
use chrono::Utc;

use super::super::args::BuildCommand;
use super::{CommandResult, CommandSummary, StatsSummary};
use crate::{
    config::load_config,
    core::build::build_source_records,
    export::{ExportOptions, export_all, json::format_timestamp, report::HtmlReport},
};

pub const BUILD_REPORT_TITLE: &str = "Translation Status";

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let config = load_config(&cmd.config)?;
    let sources = build_source_records(&config.sources)?;

    let options = ExportOptions {
        generated_at: Some(format_timestamp(Utc::now())),
        title: BUILD_REPORT_TITLE.to_string(),
        report: !cmd.no_report,
    };
    let renderer = HtmlReport::new()?;
    let export = export_all(&sources.records, &cmd.output, &options, &renderer)?;

    Ok(CommandResult {
        summary: CommandSummary::Stats(StatsSummary {
            output_dir: cmd.output,
            records: sources.records,
            files_scanned: sources.files_scanned,
            skipped_sources: sources.skipped,
            export,
        }),
    })
}
