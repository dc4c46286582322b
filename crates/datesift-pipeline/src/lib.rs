//! datesift-pipeline: the item-processing step around the date normalizer.
//!
//! Scraped records arrive as [`Item`]s described by an [`ItemSchema`]. Each
//! stage implements [`ItemPipeline`]; a [`Pipeline`] runs them in order:
//!
//! ```text
//! csv_io::read_items ──► DataCleaner ──► DateFormatter ──► csv_io::write_items
//! ```

pub mod cleaner;
pub mod csv_io;
pub mod dates;
pub mod item;

use std::sync::Arc;

use datesift_core::config::Config;
use datesift_core::{ConfigError, DateNormalizer};

pub use cleaner::DataCleaner;
pub use dates::DateFormatter;
pub use item::{FieldSpec, FieldValue, Item, ItemSchema};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("column {0:?} is declared but missing from the input header")]
    MissingColumn(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Trait implemented by each item-processing stage.
pub trait ItemPipeline: Send + Sync {
    fn process_item(&self, item: Item) -> Result<Item, PipelineError>;
}

/// Ordered list of stages applied to every item.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn ItemPipeline>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stage(mut self, stage: impl ItemPipeline + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Cleaner followed by the date formatter, both configured from `config`.
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        let normalizer = Arc::new(DateNormalizer::new(&config.dates)?);
        Ok(Self::new()
            .with_stage(DataCleaner::new(config.cleaning.clone()))
            .with_stage(DateFormatter::new(normalizer)))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn process_item(&self, item: Item) -> Result<Item, PipelineError> {
        self.stages
            .iter()
            .try_fold(item, |item, stage| stage.process_item(item))
    }

    pub fn process_all(&self, items: Vec<Item>) -> Result<Vec<Item>, PipelineError> {
        items.into_iter().map(|item| self.process_item(item)).collect()
    }
}
