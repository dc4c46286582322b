//! datesift-core: date recognition and normalisation.
//!
//! Scraped vendor lifecycle tables carry dates in every imaginable shape:
//! `05-Mar-2024`, `March 5th, 2024`, `03/2024`, `Q3 2024`, `2024`. This crate
//! finds the first date in a text field, decides whether a partial date marks
//! the start or the end of a range, and rewrites it in one output format.
//!
//! # Pipeline
//!
//! ```text
//! text ──► extract ──► role ──► resolve ──► format
//!            │                     │
//!            └── no match ─────────┴── miss ──► text unchanged
//! ```
//!
//! Everything after [`PatternTable::build`] is pure and allocation-light; a
//! built [`DateNormalizer`] can be shared freely between threads.

pub mod config;
pub mod error;
pub mod extract;
pub mod normalizer;
pub mod parse;
pub mod patterns;
pub mod resolve;
pub mod role;
pub mod types;

pub use error::ConfigError;
pub use normalizer::{DateNormalizer, Outcome};
pub use patterns::PatternTable;
pub use resolve::{Miss, Resolution};
pub use types::{DateMatch, FieldMeta, FieldRole, Granularity, Shape};
