use anyhow::Result;
use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::core::{
    collect::collect_stats,
    data::{CatalogStats, StatRecord},
};

/// Flattens aggregated buckets into export records.
///
/// One record per bucket, in bucket order (language, then group). Every
/// record carries `source` when the stats were read under a configured label.
pub fn build_records(stats: &CatalogStats, source: Option<&str>) -> Vec<StatRecord> {
    stats
        .iter()
        .map(|(key, bucket)| StatRecord::from_bucket(key, bucket, source))
        .collect()
}

/// Records of every configured source, in configuration order.
#[derive(Debug, Default)]
pub struct SourceRecords {
    pub records: Vec<StatRecord>,
    pub files_scanned: usize,
    /// Labels of sources whose local directory does not exist.
    pub skipped: Vec<String>,
}

/// Aggregates each source's local directory and tags its records with the
/// source label.
///
/// A missing directory only skips that source; a catalog that fails to
/// parse aborts the whole build.
pub fn build_source_records(sources: &[SourceConfig]) -> Result<SourceRecords> {
    let mut result = SourceRecords::default();

    for source in sources {
        if !source.local.is_dir() {
            warn!(
                "Folder '{}' not found, skipping source '{}'",
                source.local.display(),
                source.label
            );
            result.skipped.push(source.label.clone());
            continue;
        }

        let stats = collect_stats(&source.local)?;
        info!(
            "Source '{}': {} catalog files, {} buckets",
            source.label,
            stats.files_scanned,
            stats.len()
        );
        result.files_scanned += stats.files_scanned;
        result
            .records
            .extend(build_records(&stats, Some(&source.label)));
    }

    Ok(result)
}
