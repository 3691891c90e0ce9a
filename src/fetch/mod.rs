//! Source fetcher: pulls catalog files out of remote repositories.
//!
//! Each source with both `clone` and `sparse` set is sparse-checked-out into a
//! temporary directory, its catalogs are copied into the source's `local`
//! directory, and the temporary copy is removed. The first failure aborts the
//! run; sources that were already fetched keep their files.

mod git;

use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Config, SourceConfig};
use crate::core::parsers::is_catalog_file;

pub use git::GitCli;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Sparse path '{path}' not found in {url}")]
    MissingSubpath { url: String, path: String },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Version control access used by the fetcher.
pub trait Vcs {
    /// Checks out only `subpath` of the repository at `url` into `dest`.
    ///
    /// `dest` does not exist yet when this is called.
    fn sparse_checkout(&self, url: &str, subpath: &str, dest: &Path) -> Result<(), FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedSource {
    pub label: String,
    pub local: PathBuf,
    /// Catalog files copied into `local`.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub fetched: Vec<FetchedSource>,
    /// Labels of sources without a remote, left untouched.
    pub skipped: Vec<String>,
}

pub fn fetch_sources(config: &Config, vcs: &dyn Vcs) -> Result<FetchSummary, FetchError> {
    let mut summary = FetchSummary::default();

    for source in &config.sources {
        let Some((url, sparse)) = source.remote() else {
            debug!("Source '{}' has no remote, skipping", source.label);
            summary.skipped.push(source.label.clone());
            continue;
        };

        let files = fetch_source(source, url, sparse, vcs)?;
        summary.fetched.push(FetchedSource {
            label: source.label.clone(),
            local: source.local.clone(),
            files,
        });
    }

    Ok(summary)
}

/// Fetches one source and returns the copied files.
///
/// The temporary working copy is removed when this returns, on success and
/// on error alike.
pub fn fetch_source(
    source: &SourceConfig,
    url: &str,
    sparse: &str,
    vcs: &dyn Vcs,
) -> Result<Vec<PathBuf>, FetchError> {
    info!("Cloning {} (sparse: {})", url, sparse);

    let workdir = tempfile::Builder::new()
        .prefix("transtat-fetch-")
        .tempdir()?;
    let repo_dir = workdir.path().join("repo");
    vcs.sparse_checkout(url, sparse, &repo_dir)?;

    let catalog_dir = repo_dir.join(sparse);
    if !catalog_dir.is_dir() {
        return Err(FetchError::MissingSubpath {
            url: url.to_string(),
            path: sparse.to_string(),
        });
    }

    fs::create_dir_all(&source.local)?;
    copy_catalogs(&catalog_dir, &source.local)
}

/// Copies the catalog files directly inside `from` (not recursive) into `to`.
fn copy_catalogs(from: &Path, to: &Path) -> Result<Vec<PathBuf>, FetchError> {
    let mut catalogs = Vec::new();
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_catalog_file) {
            catalogs.push(entry.path());
        }
    }
    catalogs.sort();

    let mut copied = Vec::with_capacity(catalogs.len());
    for src in catalogs {
        let Some(file_name) = src.file_name() else {
            continue;
        };
        let dst = to.join(file_name);
        debug!("Copying {} -> {}", src.display(), dst.display());
        fs::copy(&src, &dst).map_err(|source| FetchError::Copy {
            from: src.clone(),
            to: dst.clone(),
            source,
        })?;
        copied.push(dst);
    }

    Ok(copied)
}
