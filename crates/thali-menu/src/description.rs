//! Single-line menu descriptions.

use serde_json::Value;
use thali_common::format_fixed;
use thali_model::{FormatOptions, MenuItem, Thali};

/// Describes a thali with the default menu format.
///
/// # Example
/// ```
/// use thali_menu::{Thali, describe};
///
/// let thali = Thali::new("Rajasthani Thali", ["dal", "churma"], 250.0, true);
/// assert_eq!(
///     describe(&thali),
///     "RAJASTHANI THALI (Veg) - Items: dal, churma - Rs.250.00"
/// );
/// ```
pub fn describe(thali: &Thali) -> String {
    describe_with(thali, &FormatOptions::default())
}

/// Describes a thali as `NAME (label) - Items: a, b - <currency><price>`.
///
/// The name is uppercased and the price always carries
/// `options.price_digits` fractional digits.
pub fn describe_with(thali: &Thali, options: &FormatOptions) -> String {
    format!(
        "{} ({}) - Items: {} - {}{}",
        thali.name().to_uppercase(),
        options.veg_label_for(thali.is_veg()),
        thali.items.join(options.item_separator.as_str()),
        options.currency,
        format_fixed(thali.price(), options.price_digits)
    )
}

/// Describes an untyped thali record.
///
/// Returns an empty string when the value is not a record with a text
/// `name`, a sequence of `items`, a numeric `price` and a boolean `isVeg`.
pub fn create_thali_description(record: &Value) -> String {
    match Thali::try_from(record) {
        Ok(thali) => describe(&thali),
        Err(err) => {
            tracing::debug!(reason = %err, "rejected thali description input");
            String::new()
        }
    }
}
