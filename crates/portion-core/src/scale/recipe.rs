//! Whole-recipe scaling to a new serving size

use super::{scale_ingredient_line_with, scale_nutrition, serving_factor};
use crate::error::{Error, Result};
use crate::format::FormatOptions;
use crate::types::Recipe;

/// Scales recipes to a target serving size.
///
/// Holds only formatting options, so one scaler can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct RecipeScaler {
    options: FormatOptions,
}

impl RecipeScaler {
    /// Create a scaler with default formatting
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scaler with custom formatting
    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Build a copy of `recipe` for `new_serving_size` servings.
    ///
    /// Every ingredient line and the nutrition record are multiplied by
    /// `new_serving_size / recipe.serving_size()`. Line order and count are
    /// preserved; the input recipe is left as it was.
    pub fn scale(&self, recipe: &Recipe, new_serving_size: u32) -> Result<Recipe> {
        if new_serving_size == 0 {
            return Err(Error::InvalidServingSize(new_serving_size));
        }
        let factor = serving_factor(recipe.serving_size(), new_serving_size)?;

        let ingredients = recipe
            .ingredients()
            .iter()
            .map(|line| scale_ingredient_line_with(line, factor, &self.options))
            .collect::<Result<Vec<_>>>()?;

        let nutrition = recipe
            .nutrition()
            .map(|facts| scale_nutrition(facts, factor))
            .transpose()?;

        tracing::debug!(
            recipe = recipe.id(),
            from = recipe.serving_size(),
            to = new_serving_size,
            factor,
            lines = ingredients.len(),
            "scaled recipe"
        );

        Ok(recipe.rescaled(new_serving_size, ingredients, nutrition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NutritionFacts;

    fn pancakes() -> Recipe {
        Recipe::new("pancakes", "Pancakes", 2)
            .unwrap()
            .with_ingredients(["2 cups flour", "1 1/2 cups milk", "1 egg", "salt"])
            .with_steps(["Mix", "Fry"])
            .with_dietary_tags(["vegetarian"])
            .with_cook_time(15)
            .with_nutrition(NutritionFacts::new(200, 20.0, 30.0, 10.0).unwrap())
    }

    #[test]
    fn test_scale_up() {
        let original = pancakes();
        let scaled = RecipeScaler::new().scale(&original, 4).unwrap();

        assert_eq!(scaled.serving_size(), 4);
        assert_eq!(
            scaled.ingredients(),
            ["4 cups flour", "3 cups milk", "2 egg", "salt"]
        );
        assert_eq!(
            scaled.nutrition(),
            Some(&NutritionFacts::new(400, 40.0, 60.0, 20.0).unwrap())
        );
        assert_eq!(scaled.steps(), original.steps());
        assert_eq!(scaled.dietary_tags(), original.dietary_tags());
        assert_eq!(scaled.cook_time_minutes(), Some(15));

        // input untouched
        assert_eq!(original, pancakes());
    }

    #[test]
    fn test_scale_to_zero_fails() {
        assert_eq!(
            RecipeScaler::new().scale(&pancakes(), 0),
            Err(Error::InvalidServingSize(0))
        );
    }

    #[test]
    fn test_absent_nutrition_stays_absent() {
        let recipe = Recipe::new("toast", "Toast", 1)
            .unwrap()
            .with_ingredients(["2 slices bread"]);
        let scaled = RecipeScaler::new().scale(&recipe, 3).unwrap();
        assert!(scaled.nutrition().is_none());
        assert_eq!(scaled.ingredients(), ["6 slices bread"]);
    }

    #[test]
    fn test_decimal_options_flow_through() {
        let scaler = RecipeScaler::with_options(FormatOptions {
            use_fractions: false,
            ..FormatOptions::default()
        });
        let scaled = scaler.scale(&pancakes(), 1).unwrap();
        assert_eq!(scaled.ingredients()[1], "0.75 cups milk");
    }
}
