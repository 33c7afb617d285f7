//! Shape checks for untyped menu input.
//!
//! Menu data arrives as JSON-shaped values. These helpers turn the loose
//! shape checks into typed results so callers can decide how to report a
//! rejection.

use std::borrow::Cow;

use serde_json::Value;
use thali_common::format_numeric;

use crate::error::{Result, ThaliError};

/// Returns the elements of a record sequence.
pub fn as_records(value: &Value) -> Result<&[Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ThaliError::NotASequence)
}

/// Returns the elements of a record sequence that must not be empty.
pub fn as_non_empty_records(value: &Value) -> Result<&[Value]> {
    let records = as_records(value)?;
    if records.is_empty() {
        return Err(ThaliError::EmptySequence);
    }
    Ok(records)
}

/// Returns the text of a value, naming it as `what` on rejection.
pub fn as_text<'a>(value: &'a Value, what: &'static str) -> Result<&'a str> {
    value.as_str().ok_or(ThaliError::NotText { what })
}

/// Renders any value as display text.
///
/// Strings are borrowed as-is, numbers use natural numeric formatting,
/// `null` is empty, arrays join their elements' text with `,` and objects
/// render as `[object Object]`.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
        Value::Number(number) => match number.as_f64() {
            Some(n) => Cow::Owned(format_numeric(n)),
            None => Cow::Owned(number.to_string()),
        },
        Value::Array(values) => Cow::Owned(
            values
                .iter()
                .map(value_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

/// Reads a value as a yes/no flag the way loose menu data does: `false`,
/// `null`, zero and the empty string are "no", everything else is "yes".
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
