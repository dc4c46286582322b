//! Configuration errors raised while building the recognizer.
//!
//! Resolution misses are not errors: they are reported through
//! [`Resolution`](crate::resolve::Resolution) and leave the text unchanged.

use crate::types::Shape;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more enabled shape names have no template. Every offending
    /// name is listed, in the order it was requested.
    #[error("no date pattern is implemented for: {}", .0.join(", "))]
    UnknownShapes(Vec<String>),

    #[error("output date format {format:?} cannot render a calendar date")]
    InvalidFormat { format: String },

    #[error("date pattern {shape} failed to compile")]
    Pattern {
        shape: Shape,
        #[source]
        source: regex::Error,
    },
}
