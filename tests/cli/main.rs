use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod build;
mod dashboard;
mod fetch;

const BIN_NAME: &str = "transtat";

/// Catalog header shared by the fixtures.
pub const PO_HEADER: &str = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

"#;

/// Builds a catalog from `(msgid, msgstr, fuzzy)` entries.
pub fn catalog(entries: &[(&str, &str, bool)]) -> String {
    let mut content = PO_HEADER.to_string();
    for (msgid, msgstr, fuzzy) in entries {
        if *fuzzy {
            content.push_str("#, fuzzy\n");
        }
        content.push_str(&format!("msgid \"{}\"\nmsgstr \"{}\"\n\n", msgid, msgstr));
    }
    content
}

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn build_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("build");
        cmd
    }

    pub fn dashboard_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("dashboard");
        cmd
    }

    pub fn fetch_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("fetch");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }
}
