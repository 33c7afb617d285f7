use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ThaliError};
use crate::item::MenuItem;
use crate::shape::value_text;

/// A meal-combo record: a name, its dishes, a price and a vegetarian flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thali {
    pub name: String,
    /// Dish names in display order.
    pub items: Vec<String>,
    /// Price in rupees.
    pub price: f64,
    pub is_veg: bool,
}

impl Thali {
    pub fn new<I, S>(name: impl Into<String>, items: I, price: f64, is_veg: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
            price,
            is_veg,
        }
    }
}

/// Strict shape check: the value must be a record with a text `name`, a
/// sequence of `items`, a numeric `price` and a boolean `isVeg`.
///
/// Items themselves are not type-checked; each one is kept as its display text.
impl TryFrom<&Value> for Thali {
    type Error = ThaliError;

    fn try_from(value: &Value) -> Result<Self> {
        let record = value.as_object().ok_or(ThaliError::NotARecord)?;
        let invalid = |field: &'static str, expected: &'static str| {
            ThaliError::InvalidField { field, expected }
        };

        let name = record
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("name", "text"))?;
        let items = record
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| invalid("items", "a sequence"))?;
        let price = record
            .get("price")
            .and_then(Value::as_f64)
            .ok_or_else(|| invalid("price", "a number"))?;
        let is_veg = record
            .get("isVeg")
            .and_then(Value::as_bool)
            .ok_or_else(|| invalid("isVeg", "a boolean"))?;

        Ok(Self {
            name: name.to_string(),
            items: items.iter().map(|item| value_text(item).into_owned()).collect(),
            price,
            is_veg,
        })
    }
}

impl MenuItem for Thali {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn items(&self) -> Vec<Cow<'_, str>> {
        self.items.iter().map(|item| Cow::Borrowed(item.as_str())).collect()
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn is_veg(&self) -> bool {
        self.is_veg
    }
}
