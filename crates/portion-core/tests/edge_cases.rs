use portion_core::{parse_ingredient, parse_quantity, scale_ingredient_line, Error, QuantityMatch};

#[test]
fn test_unicode_name_survives() {
    let p = parse_ingredient("200 g crème fraîche").unwrap();
    assert_eq!(p.unit(), "g");
    assert_eq!(p.name(), "crème fraîche");
    assert_eq!(
        scale_ingredient_line("200 g crème fraîche", 0.5).unwrap(),
        "100 g crème fraîche"
    );
}

#[test]
fn test_number_glued_to_unit() {
    let p = parse_ingredient("250g butter").unwrap();
    assert_eq!(p.quantity(), 250.0);
    assert_eq!(p.unit(), "g");
    assert_eq!(p.name(), "butter");
}

#[test]
fn test_zero_quantity_is_no_quantity() {
    let p = parse_ingredient("0 cups flour").unwrap();
    assert!(!p.has_quantity());
    assert_eq!(
        scale_ingredient_line("0 cups flour", 4.0).unwrap(),
        "0 cups flour"
    );
}

#[test]
fn test_improper_mixed_number() {
    let p = parse_ingredient("1 3/2 cups milk").unwrap();
    assert_eq!(p.quantity(), 2.5);
}

#[test]
fn test_large_quantities() {
    assert_eq!(
        scale_ingredient_line("1000000 g sugar", 1000.0).unwrap(),
        "1000000000 g sugar"
    );
    let huge = format!("{} cups flour", "9".repeat(400));
    assert!(matches!(
        parse_ingredient(&huge),
        Err(Error::InvalidQuantity { .. })
    ));
}

#[test]
fn test_decimal_point_without_digits() {
    // "2." keeps the dot with the name; the quantity is still 2
    let p = parse_ingredient("2. eggs").unwrap();
    assert_eq!(p.quantity(), 2.0);
    assert_eq!(p.name(), ". eggs");
}

#[test]
fn test_quantity_match_reports_consumed() {
    assert_eq!(
        parse_quantity("3/4 cup").unwrap(),
        QuantityMatch {
            value: 0.75,
            consumed: 4
        }
    );
}

#[test]
fn test_tiny_factor() {
    assert_eq!(
        scale_ingredient_line("1 cup rice", 0.001).unwrap(),
        "0.001 cup rice"
    );
}
