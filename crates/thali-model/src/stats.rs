use serde::{Deserialize, Serialize};

/// Aggregate figures over a collection of thalis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThaliStats {
    pub total_thalis: usize,
    pub veg_count: usize,
    pub non_veg_count: usize,
    /// Mean price, already rendered with fixed fractional digits.
    pub avg_price: String,
    pub cheapest: f64,
    pub costliest: f64,
    /// Names in input order.
    pub names: Vec<String>,
}
