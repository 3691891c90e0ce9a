//! Transtat - translation status dashboards for gettext catalogs
//!
//! Transtat is a CLI tool and library that counts translated, fuzzy and
//! untranslated entries in `.po` files, grouped by language and document,
//! and exports the result as JSON, CSV and a static HTML dashboard.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, logging, terminal report)
//! - `config`: YAML source list loading and validation
//! - `core`: Catalog reading, aggregation and record building
//! - `export`: JSON / CSV writers and the HTML report renderer
//! - `fetch`: Sparse checkout of catalogs from remote git repositories

pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod fetch;
