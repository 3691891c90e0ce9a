use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
mod logging;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use logging::init_logging;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    init_logging(args.verbose());

    let result = run::run(args)?;
    report::print(&result);

    Ok(ExitStatus::Success)
}
