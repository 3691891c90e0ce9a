use anyhow::Result;

use super::super::args::DashboardCommand;
use super::{CommandResult, CommandSummary, StatsSummary};
use crate::{
    core::{build_records, collect_stats},
    export::{ExportOptions, export_all, report::HtmlReport},
};

pub fn dashboard(cmd: DashboardCommand) -> Result<CommandResult> {
    let stats = collect_stats(&cmd.po_dir)?;
    let records = build_records(&stats, None);

    let renderer = HtmlReport::new()?;
    let export = export_all(&records, &cmd.output, &ExportOptions::default(), &renderer)?;

    Ok(CommandResult {
        summary: CommandSummary::Stats(StatsSummary {
            output_dir: cmd.output,
            records,
            files_scanned: stats.files_scanned,
            skipped_sources: Vec::new(),
            export,
        }),
    })
}
