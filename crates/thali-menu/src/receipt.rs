//! Customer receipts.

use serde_json::Value;
use thali_common::format_numeric;
use thali_model::{FormatOptions, MenuEntry, MenuItem, Result, as_non_empty_records, as_text};

/// Renders a receipt with the default format. `None` for an empty order.
pub fn render_receipt<T: MenuItem>(customer: &str, records: &[T]) -> Option<String> {
    render_receipt_with(customer, records, &FormatOptions::default())
}

/// Renders a multi-line receipt:
///
/// ```text
/// THALI RECEIPT
/// ---
/// Customer: PRIYA
/// - Thali A x Rs.100
/// ---
/// Total: Rs.100
/// Items: 1
/// ```
///
/// Line prices and the total use natural numeric formatting, so whole
/// amounts carry no fractional digits.
pub fn render_receipt_with<T: MenuItem>(
    customer: &str,
    records: &[T],
    options: &FormatOptions,
) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let currency = &options.currency;
    let total = records.iter().fold(0.0, |acc, record| acc + record.price());

    let mut lines = Vec::with_capacity(records.len() + 6);
    lines.push(options.receipt_title.clone());
    lines.push(options.receipt_rule.clone());
    lines.push(format!("Customer: {}", customer.to_uppercase()));
    lines.extend(records.iter().map(|record| {
        format!(
            "- {} x {currency}{}",
            record.name(),
            format_numeric(record.price())
        )
    }));
    lines.push(options.receipt_rule.clone());
    lines.push(format!("Total: {currency}{}", format_numeric(total)));
    lines.push(format!("Items: {}", records.len()));
    Some(lines.join("\n"))
}

/// Renders a receipt from untyped input.
///
/// Returns an empty string when the customer name is not text or the records
/// are not a non-empty sequence.
pub fn generate_thali_receipt(customer: &Value, records: &Value) -> String {
    let (customer, records) = match receipt_input(customer, records) {
        Ok(input) => input,
        Err(err) => {
            tracing::debug!(reason = %err, "rejected thali receipt input");
            return String::new();
        }
    };
    tracing::trace!(records = records.len(), "rendering thali receipt");
    render_receipt(customer, &MenuEntry::from_records(records)).unwrap_or_default()
}

fn receipt_input<'c, 'r>(customer: &'c Value, records: &'r Value) -> Result<(&'c str, &'r [Value])> {
    Ok((
        as_text(customer, "customer name")?,
        as_non_empty_records(records)?,
    ))
}
