use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Default output directory of the `build` command.
pub const DEFAULT_BUILD_OUTPUT: &str = "translation-status/dashboard";

/// Default catalog directory of the `dashboard` command.
pub const DEFAULT_PO_DIR: &str = "po_files";

/// Default output directory of the `dashboard` command.
pub const DEFAULT_DASHBOARD_OUTPUT: &str = "dashboard";

/// List of catalog sources, loaded from a YAML file.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

/// One catalog source.
///
/// `clone` and `sparse` are only read by the fetch command; a source without
/// them is expected to be populated locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Label written into the `source` field of every record.
    pub label: String,
    /// Local directory holding the catalogs.
    pub local: PathBuf,
    /// Remote repository to clone from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone: Option<String>,
    /// Path inside the remote repository that holds the catalogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparse: Option<String>,
}

impl SourceConfig {
    /// Returns `(clone, sparse)` if the source can be fetched.
    pub fn remote(&self) -> Option<(&str, &str)> {
        match (&self.clone, &self.sparse) {
            (Some(clone), Some(sparse)) => Some((clone.as_str(), sparse.as_str())),
            _ => None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every source needs a non-empty label and local directory.
    pub fn validate(&self) -> Result<()> {
        for (index, source) in self.sources.iter().enumerate() {
            if source.label.trim().is_empty() {
                bail!("Source #{} has an empty 'label'", index + 1);
            }
            if source.local.as_os_str().is_empty() {
                bail!("Source '{}' has an empty 'local' directory", source.label);
            }
        }
        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a mapping.
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    parse_config(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
}
