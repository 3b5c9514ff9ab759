use dataset_formula as dsf;
use serde_json::json;

fn sample() -> dsf::Dataset {
    dsf::Dataset::try_from(json!({
        "price": 100,
        "quantity": 3,
        "discount": 0.1,
        "productName": "Laptop",
        "status": "In Stock",
        "rating": 4.8,
        "reviews": 324,
    }))
    .unwrap()
}

fn with(extra: serde_json::Value) -> dsf::Dataset {
    let mut doc = json!({
        "price": 100,
        "quantity": 3,
        "discount": 0.1,
        "rating": 4.8,
        "reviews": 324,
    });
    if let (Some(base), Some(more)) = (doc.as_object_mut(), extra.as_object()) {
        base.extend(more.clone());
    }
    dsf::Dataset::try_from(doc).unwrap()
}

fn eval(formula: &str) -> dsf::Result<f64> {
    dsf::evaluate_formula(formula, &sample())
}

#[test]
fn test_simple_key_arithmetic() {
    assert_eq!(eval("{price} + {quantity}"), Ok(103.0));
    assert_eq!(eval("{price} - {quantity}"), Ok(97.0));
    assert_eq!(eval("{price} * {quantity}"), Ok(300.0));
    let quotient = eval("{price} / {quantity}").unwrap();
    assert!((quotient - 33.333).abs() < 0.001);
}

#[test]
fn test_compound_markers() {
    assert_eq!(eval("{price * quantity}"), Ok(300.0));
    assert_eq!(eval("{price * quantity * (1 - discount)}"), Ok(270.0));
    assert_eq!(eval("{price * quantity + reviews}"), Ok(624.0));
    let ratio = eval("{price * quantity / reviews}").unwrap();
    assert!((ratio - 0.926).abs() < 0.001);
}

#[test]
fn test_literals_mixed_with_keys() {
    assert_eq!(eval("{price} + 50"), Ok(150.0));
    assert_eq!(eval("{rating} * 10"), Ok(48.0));
    assert_eq!(eval("100 + 200"), Ok(300.0));
    assert_eq!(dsf::evaluate_formula("{price} * 1000000", &sample()), Ok(100_000_000.0));
    assert_eq!(dsf::evaluate_formula("{price} * 0.0001", &sample()), Ok(0.01));
}

#[test]
fn test_zero_and_negative_values() {
    assert_eq!(dsf::evaluate_formula("{price} + {zero}", &with(json!({"zero": 0}))), Ok(100.0));
    assert_eq!(
        dsf::evaluate_formula("{price} + {negative}", &with(json!({"negative": -10}))),
        Ok(90.0)
    );
}

#[test]
fn test_real_world_scenarios() {
    let taxed = with(json!({"taxRate": 0.08}));
    assert_eq!(dsf::evaluate_formula("{price * quantity * (1 + taxRate)}", &taxed), Ok(324.0));
    assert_eq!(eval("{rating * reviews / reviews}"), Ok(4.8));
    assert_eq!(eval("{discount * 100}"), Ok(10.0));
    assert_eq!(eval("{price * (1 - discount)}"), Ok(90.0));
}

#[test]
fn test_unary_minus_is_supported() {
    assert_eq!(eval("{price} * -2"), Ok(-200.0));
    assert_eq!(eval("-{price} + 1"), Ok(-99.0));
}

#[test]
fn test_hyphenated_keys() {
    let ds = dsf::Dataset::try_from(json!({"unit-price": 4, "price": 10, "qty": 2})).unwrap();
    assert_eq!(dsf::evaluate_formula("{unit-price}", &ds), Ok(4.0));
    assert_eq!(dsf::evaluate_formula("{unit-price * qty}", &ds), Ok(8.0));
    assert_eq!(dsf::evaluate_formula("{price-qty}", &ds), Ok(8.0));
}

#[test]
fn test_formula_without_markers_is_evaluated() {
    assert_eq!(dsf::evaluate_formula("(1 + 2) * 3", &dsf::Dataset::new()), Ok(9.0));
}
