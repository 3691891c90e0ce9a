use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::Command,
};

use tracing::debug;

use super::{FetchError, Vcs};

/// [`Vcs`] backed by the `git` command line.
///
/// Relies on whatever credentials the ambient git setup provides.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&OsStr], cwd: Option<&Path>) -> Result<(), FetchError> {
        let command_line = self.command_line(args);
        debug!("Running {}", command_line);

        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }

        let status = command.status().map_err(|source| FetchError::Spawn {
            command: command_line.clone(),
            source,
        })?;
        if !status.success() {
            return Err(FetchError::CommandFailed {
                command: command_line,
                status,
            });
        }
        Ok(())
    }

    fn command_line(&self, args: &[&OsStr]) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(args.iter().copied())
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Vcs for GitCli {
    fn sparse_checkout(&self, url: &str, subpath: &str, dest: &Path) -> Result<(), FetchError> {
        self.run(
            &[
                OsStr::new("clone"),
                OsStr::new("--depth"),
                OsStr::new("1"),
                OsStr::new("--filter=blob:none"),
                OsStr::new("--sparse"),
                OsStr::new(url),
                dest.as_os_str(),
            ],
            None,
        )?;
        self.run(
            &[
                OsStr::new("sparse-checkout"),
                OsStr::new("set"),
                OsStr::new(subpath),
            ],
            Some(dest),
        )
    }
}
