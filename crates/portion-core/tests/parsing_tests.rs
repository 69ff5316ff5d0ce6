use portion_core::{parse_ingredient, Error, ParsedIngredient, Unit};
use pretty_assertions::assert_eq;

fn ingredient(quantity: f64, unit: &str, name: &str) -> ParsedIngredient {
    ParsedIngredient::new(quantity, unit, name).unwrap()
}

#[test]
fn test_documented_scenarios() {
    assert_eq!(
        parse_ingredient("2 cups flour").unwrap(),
        ingredient(2.0, "cups", "flour")
    );
    assert_eq!(
        parse_ingredient("1 1/2 cups water").unwrap(),
        ingredient(1.5, "cups", "water")
    );
    assert_eq!(
        parse_ingredient("3 eggs").unwrap(),
        ingredient(3.0, "", "eggs")
    );
    assert_eq!(
        parse_ingredient("salt").unwrap(),
        ingredient(0.0, "", "salt")
    );
}

#[test]
fn test_common_units() {
    let cases = [
        ("1 tablespoon butter", "tablespoon", Unit::Tablespoon),
        ("2 teaspoons vanilla", "teaspoons", Unit::Teaspoon),
        ("500 grams pasta", "grams", Unit::Gram),
        ("8 ounces cream cheese", "ounces", Unit::Ounce),
        ("1 pound ground beef", "pound", Unit::Pound),
        ("250 ml milk", "ml", Unit::Milliliter),
        ("1 kg potatoes", "kg", Unit::Kilogram),
        ("2 cloves garlic", "cloves", Unit::Clove),
    ];

    for (line, unit, expected) in cases {
        let p = parse_ingredient(line).unwrap();
        assert_eq!(p.unit(), unit, "unit of {line:?}");
        assert_eq!(p.known_unit(), Some(expected), "registry unit of {line:?}");
    }
}

#[test]
fn test_multi_word_names() {
    let p = parse_ingredient("1/4 tsp baking soda").unwrap();
    assert_eq!(p.quantity(), 0.25);
    assert_eq!(p.name(), "baking soda");

    let p = parse_ingredient("2 large red onions, diced").unwrap();
    assert_eq!(p.unit(), "");
    assert_eq!(p.name(), "large red onions, diced");
}

#[test]
fn test_unit_matching_is_case_insensitive() {
    let p = parse_ingredient("2 CUPS Flour").unwrap();
    assert_eq!(p.unit(), "cups");
    assert_eq!(p.name(), "Flour");
}

#[test]
fn test_descriptor_phrases_keep_ingredient() {
    for line in ["1 pinch of salt", "pinch of salt", "1 dash hot sauce", "salt to taste"] {
        let p = parse_ingredient(line).unwrap();
        let core = if line.contains("hot sauce") { "hot sauce" } else { "salt" };
        assert!(
            p.name().contains(core),
            "{line:?} lost its ingredient: {:?}",
            p.name()
        );
    }
}

#[test]
fn test_parenthetical_size_is_name() {
    let p = parse_ingredient("1 (14 oz) can beans").unwrap();
    assert_eq!(p.quantity(), 1.0);
    assert_eq!(p.unit(), "");
    assert_eq!(p.name(), "(14 oz) can beans");
}

#[test]
fn test_invalid_lines() {
    assert_eq!(parse_ingredient("\n"), Err(Error::EmptyIngredientLine));
    assert!(matches!(
        parse_ingredient("1/0 cup milk"),
        Err(Error::InvalidQuantity { .. })
    ));
}
