//! Normalizer: the transform offered to the item-processing step.
//!
//! `(field name, field metadata, field text) → field text`. Text is rewritten
//! only when a date is found and resolves; every other path hands the input
//! back untouched.

use std::borrow::Cow;
use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::config::DateConfig;
use crate::error::ConfigError;
use crate::extract::extract;
use crate::patterns::PatternTable;
use crate::resolve::{resolve, Miss, Resolution};
use crate::role::resolve_role;
use crate::types::{DateMatch, FieldMeta, FieldRole};

/// What the normalizer made of one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'t> {
    /// No pattern matched.
    NoMatch,
    /// A pattern matched but the fragment did not resolve.
    Miss { matched: DateMatch<'t>, reason: Miss },
    Normalized {
        matched: DateMatch<'t>,
        role: FieldRole,
        date: NaiveDate,
    },
}

/// Compiled pattern table plus output settings. Read-only after
/// construction and safe to share between threads.
#[derive(Debug, Clone)]
pub struct DateNormalizer {
    table: PatternTable,
    output_format: String,
    day_first: bool,
}

impl DateNormalizer {
    /// Build the pattern table and validate the output format.
    pub fn new(config: &DateConfig) -> Result<Self, ConfigError> {
        let table = PatternTable::build(&config.enabled_patterns)?;
        let probe = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap_or_default();
        let mut scratch = String::new();
        if write!(scratch, "{}", probe.format(&config.output_format)).is_err() {
            return Err(ConfigError::InvalidFormat {
                format: config.output_format.clone(),
            });
        }
        Ok(Self {
            table,
            output_format: config.output_format.clone(),
            day_first: config.day_first,
        })
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn output_format(&self) -> &str {
        &self.output_format
    }

    /// Find, classify and resolve the first date in `text`.
    pub fn analyze<'t>(&self, field: &str, meta: &FieldMeta, text: &'t str) -> Outcome<'t> {
        let Some(matched) = extract(&self.table, text) else {
            return Outcome::NoMatch;
        };
        let role = resolve_role(field, meta, text);
        match resolve(&matched, role, self.day_first) {
            Resolution::Resolved(date) => Outcome::Normalized { matched, role, date },
            Resolution::Unchanged(reason) => Outcome::Miss { matched, reason },
        }
    }

    /// Rewrite `text` as the configured date format, or return it unchanged.
    pub fn normalize<'t>(&self, field: &str, meta: &FieldMeta, text: &'t str) -> Cow<'t, str> {
        match self.analyze(field, meta, text) {
            Outcome::NoMatch => {
                tracing::debug!(field, text, "no date pattern matched");
                Cow::Borrowed(text)
            }
            Outcome::Miss { matched, reason } => {
                tracing::debug!(
                    field,
                    text,
                    shape = %matched.shape,
                    fragment = matched.text,
                    %reason,
                    "date left unchanged"
                );
                Cow::Borrowed(text)
            }
            Outcome::Normalized { matched, role, date } => match self.format(date) {
                Some(out) => {
                    tracing::trace!(field, shape = %matched.shape, %role, %out, "date normalised");
                    Cow::Owned(out)
                }
                None => Cow::Borrowed(text),
            },
        }
    }

    /// Render `date` in the output format. `None` if chrono cannot render it.
    pub fn format(&self, date: NaiveDate) -> Option<String> {
        let mut out = String::new();
        write!(out, "{}", date.format(&self.output_format)).ok()?;
        Some(out)
    }
}
