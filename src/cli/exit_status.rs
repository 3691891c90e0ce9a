use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, all outputs written
/// - `Error` (2): Command failed (bad config, parse error, failed fetch, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to an error that aborted the run.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
