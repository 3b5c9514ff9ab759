use dataset_formula as dsf;
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample() -> dsf::Dataset {
    dsf::Dataset::try_from(json!({
        "price": 100,
        "quantity": 3,
        "discount": 0.1,
        "productName": "Laptop",
    }))
    .unwrap()
}

fn display(formula: &str) -> String {
    dsf::format_display(formula, &sample())
}

#[test]
fn test_simple_key() {
    assert_eq!(display("{price}"), "100");
    assert_eq!(display("{productName}"), "Laptop");
}

#[test]
fn test_compound_expressions_stay_unevaluated() {
    assert_eq!(display("{price * quantity}"), "100 * 3");
    assert_eq!(display("{price * quantity * (1 - discount)}"), "100 * 3 * (1 - 0.1)");
    assert_eq!(display("{price * quantity + discount}"), "100 * 3 + 0.1");
}

#[test]
fn test_multiple_markers() {
    assert_eq!(display("{price} + {quantity} + {discount}"), "100 + 3 + 0.1");
}

#[test]
fn test_empty_and_whitespace() {
    assert_eq!(display(""), "");
    assert_eq!(display("   "), "   ");
}

#[test]
fn test_missing_keys() {
    assert_eq!(display("{price} + {nonexistent}"), "100 + {nonexistent}");
    assert_eq!(display("{price * tax}"), "100 * tax");
}

#[test]
fn test_surrounding_text() {
    assert_eq!(
        display("Total: ${price * quantity * (1 - discount)}"),
        "Total: $100 * 3 * (1 - 0.1)"
    );
}

#[test]
fn test_display_skips_validation() {
    assert_eq!(display("{price} / 0"), "100 / 0");
    assert_eq!(display("{price} + + alert(1)"), "100 + + alert(1)");
}

#[test]
fn test_display_matches_evaluation() {
    let ds = sample();
    let shown = dsf::format_display("{price} * {quantity}", &ds);
    let value = dsf::evaluate_formula("{price} * {quantity}", &ds).unwrap();
    assert_eq!(format!("{shown} = {value}"), "100 * 3 = 300");
}
