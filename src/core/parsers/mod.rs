//! Catalog file parsers.
//!
//! - `po`: gettext `.po` catalog reader and file name conventions

pub mod po;

pub use po::{CatalogEntry, is_catalog_file, read_catalog, split_catalog_name};
