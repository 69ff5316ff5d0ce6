//! portion-core: Core engine for portion
//!
//! This crate turns free-text ingredient lines into structured
//! quantity/unit/name values, renders them back into text, and scales
//! whole recipes to a new serving size. Everything here is a pure
//! function over immutable values: no I/O, no shared state.
//!
//! # Example
//!
//! ```
//! use portion_core::{parse_ingredient, scale_ingredient_line, NutritionFacts, Recipe, RecipeScaler};
//!
//! let p = parse_ingredient("1 1/2 cups water").unwrap();
//! assert_eq!(p.quantity(), 1.5);
//! assert_eq!(p.unit(), "cups");
//! assert_eq!(p.name(), "water");
//!
//! assert_eq!(scale_ingredient_line("2 cups flour", 2.0).unwrap(), "4 cups flour");
//!
//! let recipe = Recipe::new("pancakes", "Pancakes", 2)
//!     .unwrap()
//!     .with_ingredients(["2 cups flour", "salt"])
//!     .with_nutrition(NutritionFacts::new(200, 20.0, 30.0, 10.0).unwrap());
//! let doubled = RecipeScaler::new().scale(&recipe, 4).unwrap();
//! assert_eq!(doubled.ingredients(), ["4 cups flour", "salt"]);
//! assert_eq!(doubled.nutrition().unwrap().calories(), 400);
//! ```

pub mod error;
pub mod format;
pub mod parser;
pub mod scale;
pub mod service;
pub mod types;

pub use error::{Error, Result};
pub use format::{format_ingredient, format_ingredient_with, format_quantity_with, FormatOptions};
pub use parser::{parse_ingredient, parse_quantity, QuantityMatch};
pub use scale::{
    scale_ingredient_line, scale_ingredient_line_with, scale_nutrition, serving_factor,
    RecipeScaler,
};
pub use service::{AdjustServingSize, InMemoryRecipes, RecipeRepository};
pub use types::{
    NutritionFacts, ParsedIngredient, Recipe, ScaleRequest, Unit, UnitDef, UnitType, UNITS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Recipe>();
        assert_send_sync::<ParsedIngredient>();
        assert_send_sync::<RecipeScaler>();
        assert_send_sync::<AdjustServingSize<InMemoryRecipes>>();
    }

    #[test]
    fn test_shared_recipe_across_threads() {
        let recipe = std::sync::Arc::new(
            Recipe::new("r", "Rice", 2)
                .unwrap()
                .with_ingredients(["1 cup rice", "2 cups water"]),
        );
        let scaler = RecipeScaler::new();

        let handles: Vec<_> = (1..=4)
            .map(|servings| {
                let recipe = recipe.clone();
                let scaler = scaler.clone();
                std::thread::spawn(move || scaler.scale(&recipe, servings).unwrap())
            })
            .collect();

        let results: Vec<Recipe> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0].ingredients(), ["1/2 cup rice", "1 cups water"]);
        assert_eq!(results[3].ingredients(), ["2 cup rice", "4 cups water"]);
        assert_eq!(recipe.serving_size(), 2);
    }
}
