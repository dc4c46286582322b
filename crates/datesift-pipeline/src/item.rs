//! Item model: one scraped record and the schema describing its fields.

use std::collections::HashMap;
use std::sync::Arc;

use datesift_core::FieldMeta;

/// A declared field and its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub meta: FieldMeta,
}

/// Ordered field declarations for a family of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSchema {
    fields: Vec<FieldSpec>,
}

impl ItemSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Redeclaring a name replaces its metadata in place.
    pub fn with_field(mut self, name: impl Into<String>, meta: FieldMeta) -> Self {
        self.push(name, meta);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, meta: FieldMeta) {
        let name = name.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.meta = meta,
            None => self.fields.push(FieldSpec { name, meta }),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Fields flagged `date_field`, in declaration order.
    pub fn date_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.meta.date_field)
    }
}

/// A field value: a single string or a list of fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// Flatten to one string, joining lists with a single space.
    pub fn joined(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(" "),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// One scraped record.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    schema: Arc<ItemSchema>,
    values: HashMap<String, FieldValue>,
}

impl Item {
    pub fn new(schema: Arc<ItemSchema>) -> Self {
        Self {
            schema,
            values: HashMap::new(),
        }
    }

    pub fn schema(&self) -> &Arc<ItemSchema> {
        &self.schema
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.values.get_mut(name)
    }

    /// The value of `name` if it is a single string.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = (&String, &mut FieldValue)> {
        self.values.iter_mut()
    }
}
