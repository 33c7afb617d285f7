//! Case-insensitive menu search.

use serde_json::Value;
use thali_model::{MenuEntry, MenuItem, Result, as_records, as_text};

/// Returns the records whose name or any dish contains `query`, ignoring case.
///
/// Input order is preserved. An empty query matches every record.
pub fn search<'a, T: MenuItem>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(*record, &query))
        .collect()
}

/// Searches an untyped record sequence.
///
/// Returns an empty list when `records` is not a sequence or `query` is not
/// text. Matching records are returned as borrowed from the input.
pub fn search_thali_menu<'a>(records: &'a Value, query: &Value) -> Vec<&'a Value> {
    let (records, query) = match search_input(records, query) {
        Ok(input) => input,
        Err(err) => {
            tracing::debug!(reason = %err, "rejected thali search input");
            return Vec::new();
        }
    };
    let entries = MenuEntry::from_records(records);
    let matches: Vec<&'a Value> = search(&entries, query)
        .into_iter()
        .map(MenuEntry::value)
        .collect();
    tracing::trace!(query, matches = matches.len(), "searched thali menu");
    matches
}

fn search_input<'a, 'q>(records: &'a Value, query: &'q Value) -> Result<(&'a [Value], &'q str)> {
    Ok((as_records(records)?, as_text(query, "search query")?))
}

fn matches_query<T: MenuItem>(record: &T, lowered_query: &str) -> bool {
    record.name().to_lowercase().contains(lowered_query)
        || record
            .items()
            .iter()
            .any(|item| item.to_lowercase().contains(lowered_query))
}
