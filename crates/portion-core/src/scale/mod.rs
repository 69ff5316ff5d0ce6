//! Scaling of ingredient lines and nutrition records

mod recipe;

pub use recipe::RecipeScaler;

use crate::error::{Error, Result};
use crate::format::{format_ingredient_with, FormatOptions};
use crate::parser::parse_ingredient;
use crate::types::NutritionFacts;

/// Ratio between two serving sizes, `new / old`
pub fn serving_factor(old_serving_size: u32, new_serving_size: u32) -> Result<f64> {
    if old_serving_size == 0 {
        return Err(Error::InvalidServingSize(old_serving_size));
    }
    if new_serving_size == 0 {
        return Err(Error::InvalidServingSize(new_serving_size));
    }
    Ok(f64::from(new_serving_size) / f64::from(old_serving_size))
}

/// Scale one ingredient line with default formatting
pub fn scale_ingredient_line(line: &str, factor: f64) -> Result<String> {
    scale_ingredient_line_with(line, factor, &FormatOptions::default())
}

/// Parse, multiply and re-render a line.
///
/// Lines without a quantity ("salt") come back exactly as given.
pub fn scale_ingredient_line_with(line: &str, factor: f64, opts: &FormatOptions) -> Result<String> {
    check_factor(factor)?;

    let parsed = parse_ingredient(line)?;
    if !parsed.has_quantity() {
        return Ok(line.to_string());
    }

    let scaled = format_ingredient_with(&parsed.scaled(factor), opts);
    tracing::trace!(line, factor, scaled = %scaled, "scaled ingredient line");
    Ok(scaled)
}

/// Multiply every nutrition field by `factor`, rounding calories
pub fn scale_nutrition(facts: &NutritionFacts, factor: f64) -> Result<NutritionFacts> {
    check_factor(factor)?;
    Ok(facts.scaled(factor))
}

fn check_factor(factor: f64) -> Result<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidScaleFactor(factor));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_line() {
        assert_eq!(scale_ingredient_line("2 cups flour", 2.0).unwrap(), "4 cups flour");
        assert_eq!(
            scale_ingredient_line("1 1/2 cups water", 0.5).unwrap(),
            "3/4 cups water"
        );
        assert_eq!(scale_ingredient_line("3 eggs", 2.0 / 3.0).unwrap(), "2 eggs");
    }

    #[test]
    fn test_scale_line_without_quantity_is_unchanged() {
        assert_eq!(scale_ingredient_line("salt", 3.0).unwrap(), "salt");
        assert_eq!(
            scale_ingredient_line("  pepper   to taste", 2.0).unwrap(),
            "  pepper   to taste"
        );
    }

    #[test]
    fn test_invalid_factor() {
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                scale_ingredient_line("2 cups flour", factor),
                Err(Error::InvalidScaleFactor(_))
            ));
        }
        // Even a line with no quantity must not hide a bad factor
        assert!(scale_ingredient_line("salt", 0.0).is_err());
    }

    #[test]
    fn test_parse_errors_propagate() {
        assert_eq!(
            scale_ingredient_line("   ", 2.0),
            Err(Error::EmptyIngredientLine)
        );
        assert!(matches!(
            scale_ingredient_line("1/0 cup milk", 2.0),
            Err(Error::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_scale_nutrition() {
        let facts = NutritionFacts::new(200, 20.0, 30.0, 10.0).unwrap();
        let doubled = scale_nutrition(&facts, 2.0).unwrap();
        assert_eq!(doubled, NutritionFacts::new(400, 40.0, 60.0, 20.0).unwrap());
        assert!(matches!(
            scale_nutrition(&facts, 0.0),
            Err(Error::InvalidScaleFactor(_))
        ));
    }

    #[test]
    fn test_serving_factor() {
        assert_eq!(serving_factor(2, 4).unwrap(), 2.0);
        assert_eq!(serving_factor(4, 1).unwrap(), 0.25);
        assert_eq!(serving_factor(2, 0), Err(Error::InvalidServingSize(0)));
    }
}
