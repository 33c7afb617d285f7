//! Aggregate figures over a menu.

use serde_json::Value;
use thali_common::format_fixed;
use thali_model::{FormatOptions, MenuEntry, MenuItem, ThaliStats, as_non_empty_records};

/// Summarizes a menu with the default format. `None` for an empty menu.
pub fn summarize<T: MenuItem>(records: &[T]) -> Option<ThaliStats> {
    summarize_with(records, &FormatOptions::default())
}

/// Summarizes a menu: counts by veg flag, mean price, price extremes and
/// names in input order.
///
/// Returns `None` for an empty menu. A NaN price makes the mean and both
/// extremes NaN.
pub fn summarize_with<T: MenuItem>(records: &[T], options: &FormatOptions) -> Option<ThaliStats> {
    if records.is_empty() {
        return None;
    }

    let total_thalis = records.len();
    let veg_count = records.iter().filter(|record| record.is_veg()).count();
    let prices: Vec<f64> = records.iter().map(MenuItem::price).collect();
    let sum = prices.iter().fold(0.0, |acc, price| acc + price);

    Some(ThaliStats {
        total_thalis,
        veg_count,
        non_veg_count: total_thalis - veg_count,
        avg_price: format_fixed(sum / total_thalis as f64, options.price_digits),
        cheapest: extreme(&prices, f64::min),
        costliest: extreme(&prices, f64::max),
        names: records
            .iter()
            .map(|record| record.name().into_owned())
            .collect(),
    })
}

/// Summarizes an untyped record sequence.
///
/// Returns `None` when the value is not a sequence or is empty. Records
/// inside the sequence are read leniently, see [`MenuEntry`].
pub fn get_thali_stats(records: &Value) -> Option<ThaliStats> {
    let records = match as_non_empty_records(records) {
        Ok(records) => records,
        Err(err) => {
            tracing::debug!(reason = %err, "rejected thali stats input");
            return None;
        }
    };
    let stats = summarize(&MenuEntry::from_records(records));
    tracing::trace!(records = records.len(), "summarized thali menu");
    stats
}

// f64::min/max skip NaN; a NaN price poisons the extreme instead.
fn extreme(prices: &[f64], pick: fn(f64, f64) -> f64) -> f64 {
    prices
        .iter()
        .copied()
        .reduce(|acc, price| {
            if acc.is_nan() || price.is_nan() {
                f64::NAN
            } else {
                pick(acc, price)
            }
        })
        .unwrap_or(f64::NAN)
}
