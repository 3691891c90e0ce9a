use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, build::build, dashboard::dashboard, fetch::fetch},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary and warning count
/// - `Err` if the command fails (e.g., config not found, parse errors, failed fetch)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Dashboard(cmd)) => dashboard(cmd),
        Some(Command::Fetch(cmd)) => fetch(cmd),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
