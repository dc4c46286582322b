//! Date formatter stage: runs every declared date field through the
//! [`DateNormalizer`].

use std::borrow::Cow;
use std::sync::Arc;

use datesift_core::DateNormalizer;

use crate::item::{FieldValue, Item};
use crate::{ItemPipeline, PipelineError};

pub struct DateFormatter {
    normalizer: Arc<DateNormalizer>,
}

impl DateFormatter {
    pub fn new(normalizer: Arc<DateNormalizer>) -> Self {
        Self { normalizer }
    }
}

impl ItemPipeline for DateFormatter {
    fn process_item(&self, mut item: Item) -> Result<Item, PipelineError> {
        let schema = Arc::clone(item.schema());
        for spec in schema.date_fields() {
            // Lists and absent values are left alone.
            let Some(FieldValue::Text(text)) = item.get_mut(&spec.name) else {
                continue;
            };
            let rewritten = match self.normalizer.normalize(&spec.name, &spec.meta, text.as_str()) {
                Cow::Owned(rewritten) => rewritten,
                Cow::Borrowed(_) => continue,
            };
            *text = rewritten;
        }
        Ok(item)
    }
}
