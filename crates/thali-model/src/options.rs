//! Configuration options for menu rendering.

use serde::{Deserialize, Serialize};

/// Labels and precision used when rendering descriptions, stats and receipts.
///
/// The defaults produce the standard menu formats; every field may be
/// overridden when deserializing, missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Currency prefix placed before every price.
    pub currency: String,
    /// Separator between dish names in a description.
    pub item_separator: String,
    /// Fractional digits for description prices and the average price.
    pub price_digits: usize,
    pub veg_label: String,
    pub non_veg_label: String,
    /// First line of a receipt.
    pub receipt_title: String,
    /// Line separating receipt sections.
    pub receipt_rule: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency: "Rs.".to_string(),
            item_separator: ", ".to_string(),
            price_digits: 2,
            veg_label: "Veg".to_string(),
            non_veg_label: "Non-Veg".to_string(),
            receipt_title: "THALI RECEIPT".to_string(),
            receipt_rule: "---".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    #[must_use]
    pub fn with_item_separator(mut self, separator: impl Into<String>) -> Self {
        self.item_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_price_digits(mut self, digits: usize) -> Self {
        self.price_digits = digits;
        self
    }

    /// Set the labels used for vegetarian and non-vegetarian combos.
    #[must_use]
    pub fn with_veg_labels(mut self, veg: impl Into<String>, non_veg: impl Into<String>) -> Self {
        self.veg_label = veg.into();
        self.non_veg_label = non_veg.into();
        self
    }

    #[must_use]
    pub fn with_receipt_title(mut self, title: impl Into<String>) -> Self {
        self.receipt_title = title.into();
        self
    }

    /// Label for a combo's veg flag.
    pub fn veg_label_for(&self, is_veg: bool) -> &str {
        if is_veg {
            &self.veg_label
        } else {
            &self.non_veg_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_options_keep_defaults() {
        let options: FormatOptions =
            serde_json::from_str(r#"{"currency": "INR ", "price_digits": 0}"#).expect("options");
        assert_eq!(options.currency, "INR ");
        assert_eq!(options.price_digits, 0);
        assert_eq!(options.item_separator, ", ");
        assert_eq!(options.receipt_title, "THALI RECEIPT");
    }

    #[test]
    fn veg_labels() {
        let options = FormatOptions::new().with_veg_labels("V", "NV");
        assert_eq!(options.veg_label_for(true), "V");
        assert_eq!(options.veg_label_for(false), "NV");
    }
}
