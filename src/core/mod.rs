//! Core aggregation engine.
//!
//! ## Module Structure
//!
//! - `parsers`: Catalog reader (`.po` files) and file name conventions
//! - `collect`: Directory walk and per-(language, group) counting
//! - `build`: Conversion of counters into export records
//! - `data`: Shared data types

pub mod build;
pub mod collect;
pub mod data;
pub mod parsers;

pub use build::build_records;
pub use collect::collect_stats;
pub use data::{BucketKey, CatalogStats, CountBucket, EntryStatus, StatRecord};
pub use parsers::{CatalogEntry, read_catalog};
