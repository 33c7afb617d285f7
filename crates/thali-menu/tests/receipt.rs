use serde_json::json;
use thali_menu::{FormatOptions, Thali, generate_thali_receipt, render_receipt, render_receipt_with};

#[test]
fn receipt_for_two_thalis() {
    let records = json!([
        {"name": "Thali A", "price": 100},
        {"name": "Thali B", "price": 150}
    ]);
    let receipt = generate_thali_receipt(&json!("priya"), &records);
    insta::assert_snapshot!(receipt, @r"
    THALI RECEIPT
    ---
    Customer: PRIYA
    - Thali A x Rs.100
    - Thali B x Rs.150
    ---
    Total: Rs.250
    Items: 2
    ");
}

#[test]
fn receipt_prices_use_natural_formatting() {
    let menu = [
        Thali::new("Udupi Thali", ["sambar"], 99.5, true),
        Thali::new("Chettinad Thali", ["chicken"], 200.25, false),
    ];
    let receipt = render_receipt("Arun", &menu).expect("receipt");
    assert!(receipt.contains("- Udupi Thali x Rs.99.5"));
    assert!(receipt.contains("- Chettinad Thali x Rs.200.25"));
    assert!(receipt.ends_with("Total: Rs.299.75\nItems: 2"));
}

#[test]
fn receipt_lines_follow_input_order() {
    let records = json!([
        {"name": "Z", "price": 1},
        {"name": "A", "price": 2}
    ]);
    let receipt = generate_thali_receipt(&json!("x"), &records);
    let lines: Vec<&str> = receipt.lines().collect();
    assert_eq!(lines[3], "- Z x Rs.1");
    assert_eq!(lines[4], "- A x Rs.2");
    assert_eq!(lines.len(), 8);
}

#[test]
fn malformed_input_yields_empty_string() {
    let records = json!([{"name": "Thali A", "price": 100}]);
    assert_eq!(generate_thali_receipt(&json!(42), &records), "");
    assert_eq!(generate_thali_receipt(&json!(null), &records), "");
    assert_eq!(generate_thali_receipt(&json!("priya"), &json!([])), "");
    assert_eq!(generate_thali_receipt(&json!("priya"), &json!({"name": "A"})), "");
    assert_eq!(render_receipt::<Thali>("priya", &[]), None);
}

#[test]
fn missing_price_poisons_total() {
    let records = json!([{"name": "Thali A", "price": 100}, {"name": "Thali B"}]);
    let receipt = generate_thali_receipt(&json!("priya"), &records);
    assert!(receipt.contains("- Thali B x Rs.NaN"));
    assert!(receipt.contains("Total: Rs.NaN"));
}

#[test]
fn custom_title_and_currency() {
    let options = FormatOptions::new()
        .with_receipt_title("ANNAPURNA BHOJANALAYA")
        .with_currency("₹");
    let menu = [Thali::new("Mini Thali", ["roti"], 80.0, true)];
    let receipt = render_receipt_with("meera", &menu, &options).expect("receipt");
    insta::assert_snapshot!(receipt, @r"
    ANNAPURNA BHOJANALAYA
    ---
    Customer: MEERA
    - Mini Thali x ₹80
    ---
    Total: ₹80
    Items: 1
    ");
}
