//! Data cleaner: strips scraping noise from every value before dates are read.

use std::borrow::Cow;
use std::sync::LazyLock;

use datesift_core::config::CleaningConfig;
use regex::Regex;

use crate::item::{FieldValue, Item};
use crate::{ItemPipeline, PipelineError};

const NBSP: char = '\u{a0}';

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\n]+").expect("whitespace pattern is static and valid"));

pub struct DataCleaner {
    config: CleaningConfig,
}

impl DataCleaner {
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Entities are decoded first, so `&nbsp;` ends up as a plain space.
    pub fn clean_text(&self, text: &str) -> String {
        let decoded = if self.config.html_decode {
            html_escape::decode_html_entities(text)
        } else {
            Cow::Borrowed(text)
        };
        let mut out = decoded.replace(NBSP, " ");
        if self.config.collapse_whitespace {
            out = WHITESPACE_RUN.replace_all(&out, " ").into_owned();
        }
        if self.config.ascii_only {
            out.retain(|c| c.is_ascii());
        }
        if self.config.trim {
            out = out.trim().to_string();
        }
        out
    }

    fn clean_value(&self, value: &FieldValue) -> FieldValue {
        match value {
            FieldValue::Text(s) => FieldValue::Text(self.clean_text(s)),
            FieldValue::List(items) => {
                let cleaned: Vec<String> = items.iter().map(|s| self.clean_text(s)).collect();
                if self.config.join_lists {
                    FieldValue::Text(cleaned.join(" "))
                } else {
                    FieldValue::List(cleaned)
                }
            }
        }
    }
}

impl ItemPipeline for DataCleaner {
    fn process_item(&self, mut item: Item) -> Result<Item, PipelineError> {
        for (_, value) in item.values_mut() {
            *value = self.clean_value(value);
        }
        Ok(item)
    }
}
