//! Core data types shared by the aggregation and export phases.
//!
//! ## Module Structure
//!
//! - `bucket`: Entry classification and per-(language, group) counters
//! - `record`: Flattened export records with derived percentages

pub mod bucket;
pub mod record;

pub use bucket::{BucketKey, CatalogStats, CountBucket, EntryStatus};
pub use record::{StatRecord, percentage};
