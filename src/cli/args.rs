//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Aggregate every configured source into stats.json / stats.csv / index.html
//! - `dashboard`: Aggregate a single catalog directory into a dashboard
//! - `fetch`: Sparse-checkout configured remote repositories into their local directories

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{DEFAULT_BUILD_OUTPUT, DEFAULT_DASHBOARD_OUTPUT, DEFAULT_PO_DIR};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Dashboard(cmd)) => cmd.common.verbose,
            Some(Command::Fetch(cmd)) => cmd.common.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    /// YAML file listing the catalog sources
    #[arg(long, env = "TRANSTAT_CONFIG")]
    pub config: PathBuf,

    /// Output directory for stats.json, stats.csv and index.html
    #[arg(long, default_value = DEFAULT_BUILD_OUTPUT)]
    pub output: PathBuf,

    /// Only write the data files, skip index.html
    #[arg(long)]
    pub no_report: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DashboardCommand {
    /// Directory containing the .po files
    #[arg(long, default_value = DEFAULT_PO_DIR)]
    pub po_dir: PathBuf,

    /// Output directory for the dashboard
    #[arg(long, default_value = DEFAULT_DASHBOARD_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FetchCommand {
    /// YAML file listing the catalog sources
    #[arg(long, env = "TRANSTAT_CONFIG")]
    pub config: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build translation stats for every source in a config file
    Build(BuildCommand),
    /// Build a per-language dashboard from a single directory of .po files
    Dashboard(DashboardCommand),
    /// Fetch .po files from remote repositories listed in a config file
    Fetch(FetchCommand),
}
