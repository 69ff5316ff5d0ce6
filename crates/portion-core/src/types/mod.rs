//! Value types for portion

mod ingredient;
mod nutrition;
mod recipe;
pub mod unit;

pub use ingredient::ParsedIngredient;
pub use nutrition::NutritionFacts;
pub use recipe::{Recipe, ScaleRequest};
pub use unit::{Unit, UnitDef, UnitType, UNITS};
