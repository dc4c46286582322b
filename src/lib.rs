//! datesift: date recognition and normalisation for scraped lifecycle data.
//!
//! The binary is a thin shell over two crates:
//!
//! ```text
//! datesift-core      pattern table ──► extractor ──► role ──► resolver ──► format
//! datesift-pipeline  items ──► cleaner ──► date formatter ──► CSV
//! ```
//!
//! Both are re-exported here so integration tests can import them through a
//! single crate.

pub mod cli;

pub use datesift_core::{config, parse, patterns, resolve};
pub use datesift_core::config::Config;
pub use datesift_core::{
    ConfigError, DateMatch, DateNormalizer, FieldMeta, FieldRole, Outcome, PatternTable, Shape,
};
pub use datesift_pipeline as pipeline;
