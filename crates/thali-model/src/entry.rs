//! Lenient view over one element of a record sequence.

use std::borrow::Cow;

use serde_json::Value;

use crate::item::MenuItem;
use crate::shape::{is_truthy, value_text};

/// A borrowed menu record read without validation.
///
/// Reading never fails: a missing name reads as empty text, items that are
/// not a sequence read as no items, a non-numeric price reads as NaN and the
/// veg flag follows truthiness.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry<'a> {
    value: &'a Value,
}

impl<'a> MenuEntry<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Wraps every element of a record sequence.
    pub fn from_records(records: &'a [Value]) -> Vec<Self> {
        records.iter().map(Self::new).collect()
    }

    /// The underlying record.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.value.get(key)
    }
}

impl MenuItem for MenuEntry<'_> {
    fn name(&self) -> Cow<'_, str> {
        self.field("name").map_or(Cow::Borrowed(""), value_text)
    }

    fn items(&self) -> Vec<Cow<'_, str>> {
        self.field("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(value_text).collect())
            .unwrap_or_default()
    }

    fn price(&self) -> f64 {
        self.field("price")
            .and_then(Value::as_f64)
            .unwrap_or(f64::NAN)
    }

    fn is_veg(&self) -> bool {
        self.field("isVeg").is_some_and(is_truthy)
    }
}
