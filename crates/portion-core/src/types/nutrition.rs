//! Per-recipe nutrition record

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Nutrition totals for a recipe at its current serving size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNutrition")]
pub struct NutritionFacts {
    calories: u32,
    protein: f64, // grams
    carbs: f64,   // grams
    fat: f64,     // grams
}

#[derive(Deserialize)]
struct RawNutrition {
    calories: u32,
    protein: f64,
    carbs: f64,
    fat: f64,
}

impl TryFrom<RawNutrition> for NutritionFacts {
    type Error = Error;

    fn try_from(raw: RawNutrition) -> Result<Self> {
        NutritionFacts::new(raw.calories, raw.protein, raw.carbs, raw.fat)
    }
}

impl NutritionFacts {
    /// Build a record; gram fields must be finite and non-negative
    pub fn new(calories: u32, protein: f64, carbs: f64, fat: f64) -> Result<Self> {
        for (field, grams) in [("protein", protein), ("carbs", carbs), ("fat", fat)] {
            if !grams.is_finite() || grams < 0.0 {
                return Err(Error::invalid_quantity(
                    &format!("{field}={grams}"),
                    "nutrition grams must be a non-negative number",
                ));
            }
        }
        Ok(Self {
            calories,
            protein,
            carbs,
            fat,
        })
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }

    /// Multiply every field by `factor`; calories round to the nearest integer.
    /// Callers validate `factor > 0` first.
    pub(crate) fn scaled(&self, factor: f64) -> Self {
        let calories = (f64::from(self.calories) * factor).round();
        Self {
            // `as` saturates at u32::MAX
            calories: calories as u32,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }
}
