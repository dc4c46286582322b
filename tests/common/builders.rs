//! Test builders: ergonomic constructors for normalizers and item schemas.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::sync::Arc;

use datesift::config::DateConfig;
use datesift::pipeline::{Item, ItemSchema};
use datesift::{DateNormalizer, FieldMeta};

// ---------------------------------------------------------------------------
// NormalizerBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`DateNormalizer`] fixtures.
///
/// # Example
///
/// ```rust
/// let n = NormalizerBuilder::new()
///     .patterns(&["QYYYY", "YYYY"])
///     .format("%Y-%m-%d")
///     .build();
/// ```
pub struct NormalizerBuilder {
    config: DateConfig,
}

impl NormalizerBuilder {
    pub fn new() -> Self {
        Self {
            config: DateConfig::default(),
        }
    }

    pub fn patterns(mut self, names: &[&str]) -> Self {
        self.config.enabled_patterns = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn format(mut self, format: &str) -> Self {
        self.config.output_format = format.to_string();
        self
    }

    pub fn day_first(mut self) -> Self {
        self.config.day_first = true;
        self
    }

    pub fn build(self) -> DateNormalizer {
        DateNormalizer::new(&self.config).expect("test normalizer config must be valid")
    }
}

/// Normalizer with the default configuration.
pub fn default_normalizer() -> DateNormalizer {
    NormalizerBuilder::new().build()
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// A lifecycle-table schema: product, release (start), eol (inferred).
pub fn lifecycle_schema() -> Arc<ItemSchema> {
    Arc::new(
        ItemSchema::new()
            .with_field("product", FieldMeta::default())
            .with_field("release", FieldMeta::start())
            .with_field("end_of_life", FieldMeta::date()),
    )
}

pub fn lifecycle_item(product: &str, release: &str, eol: &str) -> Item {
    Item::new(lifecycle_schema())
        .with("product", product)
        .with("release", release)
        .with("end_of_life", eol)
}
