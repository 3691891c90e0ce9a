use serde::{Deserialize, Serialize};

use super::bucket::{BucketKey, CountBucket};

/// Percentage of `count` in `total`, rounded to one decimal with ties to even
/// (`1/16` is `6.2`).
///
/// Returns 0 for an empty total instead of dividing by zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = 100.0 * count as f64 / total as f64;
    (pct * 10.0).round_ties_even() / 10.0
}

/// One exported row: the counters of a bucket plus derived fields.
///
/// Field order here is the column order of both the JSON and CSV exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    /// Label of the configured source the bucket was read under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// File group, e.g. `report` for `report-fr.po`.
    pub file: String,
    pub language: String,
    pub translated: usize,
    pub fuzzy: usize,
    pub untranslated: usize,
    pub total: usize,
    pub pct_translated: f64,
    pub pct_fuzzy: f64,
    pub pct_untranslated: f64,
}

impl StatRecord {
    pub fn from_bucket(key: &BucketKey, bucket: &CountBucket, source: Option<&str>) -> Self {
        let total = bucket.total();
        Self {
            source: source.map(str::to_string),
            file: key.group.clone(),
            language: key.language.clone(),
            translated: bucket.translated,
            fuzzy: bucket.fuzzy,
            untranslated: bucket.untranslated,
            total,
            pct_translated: percentage(bucket.translated, total),
            pct_fuzzy: percentage(bucket.fuzzy, total),
            pct_untranslated: percentage(bucket.untranslated, total),
        }
    }

    pub fn counts(&self) -> CountBucket {
        CountBucket {
            translated: self.translated,
            fuzzy: self.fuzzy,
            untranslated: self.untranslated,
        }
    }
}
