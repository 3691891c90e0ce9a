//! Stat aggregation over a directory tree of catalogs.
//!
//! Walks the tree, reads every `.po` file and counts its entries into the
//! (language, group) bucket derived from the file name.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::{
    data::{BucketKey, CatalogStats, EntryStatus},
    parsers::{CatalogEntry, is_catalog_file, read_catalog, split_catalog_name},
};

/// Aggregates translation counters for every catalog under `root`.
///
/// Files are visited in file name order so that repeated runs produce the
/// same output. Any catalog that fails to parse aborts the whole walk.
pub fn collect_stats(root: &Path) -> Result<CatalogStats> {
    if !root.is_dir() {
        bail!("Catalog directory '{}' does not exist.", root.display());
    }

    let mut stats = CatalogStats::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_catalog_file(file_name) {
            continue;
        }

        let (language, group) = split_catalog_name(file_name);
        let entries = read_catalog(entry.path())?;
        debug!(
            "{}: {} entries (language '{}', group '{}')",
            entry.path().display(),
            entries.len(),
            language,
            group
        );

        count_entries(&mut stats, BucketKey::new(language, group), &entries);
        stats.files_scanned += 1;
    }

    Ok(stats)
}

/// Counts non-header entries into the bucket for `key`.
///
/// The bucket is created even when the catalog holds only a header, so such
/// files still show up with a zero total.
pub fn count_entries(stats: &mut CatalogStats, key: BucketKey, entries: &[CatalogEntry]) {
    let bucket = stats.bucket_mut(key);
    for entry in entries.iter().filter(|e| !e.is_header()) {
        bucket.record(EntryStatus::classify(entry.fuzzy, entry.translated));
    }
}
