pub mod entry;
pub mod error;
pub mod item;
pub mod options;
pub mod shape;
pub mod stats;
pub mod thali;

pub use entry::MenuEntry;
pub use error::{Result, ThaliError};
pub use item::MenuItem;
pub use options::FormatOptions;
pub use shape::{as_non_empty_records, as_records, as_text, value_text};
pub use stats::ThaliStats;
pub use thali::Thali;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialize_with_camel_case_keys() {
        let stats = ThaliStats {
            total_thalis: 1,
            veg_count: 1,
            non_veg_count: 0,
            avg_price: "120.00".to_string(),
            cheapest: 120.0,
            costliest: 120.0,
            names: vec!["Gujarati Thali".to_string()],
        };
        let json = serde_json::to_value(&stats).expect("serialize stats");
        assert_eq!(json["totalThalis"], 1);
        assert_eq!(json["nonVegCount"], 0);
        assert_eq!(json["avgPrice"], "120.00");
        assert_eq!(json["names"][0], "Gujarati Thali");
    }

    #[test]
    fn thali_and_entry_agree_on_well_formed_input() {
        let value = serde_json::json!({
            "name": "Bengali Thali",
            "items": ["fish curry", "rice"],
            "price": 320,
            "isVeg": false
        });
        let thali = Thali::try_from(&value).expect("valid thali");
        let entry = MenuEntry::new(&value);

        assert_eq!(thali.name(), entry.name());
        assert_eq!(thali.items(), entry.items());
        assert_eq!(thali.price(), entry.price());
        assert_eq!(thali.is_veg(), entry.is_veg());
    }
}
