use anyhow::Result;

use super::super::args::FetchCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    config::load_config,
    fetch::{GitCli, fetch_sources},
};

pub fn fetch(cmd: FetchCommand) -> Result<CommandResult> {
    let config = load_config(&cmd.config)?;
    let summary = fetch_sources(&config, &GitCli::default())?;

    Ok(CommandResult {
        summary: CommandSummary::Fetch(summary),
    })
}
