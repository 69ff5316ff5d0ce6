//! Recipe value and the serving-size request that targets it

use serde::{Deserialize, Serialize};

use super::NutritionFacts;
use crate::error::{Error, Result};

/// A recipe as the scaler sees it.
///
/// Ingredient lines are kept as raw text; they are only parsed while scaling.
/// Scaling never touches an existing value, it builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecipeDocument")]
pub struct Recipe {
    id: String,
    name: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    cook_time_minutes: Option<u32>,
    dietary_tags: Vec<String>,
    serving_size: u32,
    nutrition: Option<NutritionFacts>,
}

/// Wire shape of a recipe before validation
#[derive(Deserialize)]
struct RecipeDocument {
    id: String,
    name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    steps: Vec<String>,
    #[serde(default)]
    cook_time_minutes: Option<u32>,
    #[serde(default)]
    dietary_tags: Vec<String>,
    serving_size: u32,
    #[serde(default)]
    nutrition: Option<NutritionFacts>,
}

impl TryFrom<RecipeDocument> for Recipe {
    type Error = Error;

    fn try_from(doc: RecipeDocument) -> Result<Self> {
        let mut recipe = Recipe::new(doc.id, doc.name, doc.serving_size)?
            .with_ingredients(doc.ingredients)
            .with_steps(doc.steps)
            .with_dietary_tags(doc.dietary_tags);
        recipe.cook_time_minutes = doc.cook_time_minutes;
        recipe.nutrition = doc.nutrition;
        Ok(recipe)
    }
}

impl Recipe {
    /// Create an empty recipe. `serving_size` must be positive.
    pub fn new(id: impl Into<String>, name: impl Into<String>, serving_size: u32) -> Result<Self> {
        if serving_size == 0 {
            return Err(Error::InvalidServingSize(serving_size));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            cook_time_minutes: None,
            dietary_tags: Vec::new(),
            serving_size,
            nutrition: None,
        })
    }

    pub fn with_ingredients<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dietary_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cook_time(mut self, minutes: u32) -> Self {
        self.cook_time_minutes = Some(minutes);
        self
    }

    pub fn with_nutrition(mut self, facts: NutritionFacts) -> Self {
        self.nutrition = Some(facts);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn cook_time_minutes(&self) -> Option<u32> {
        self.cook_time_minutes
    }

    pub fn dietary_tags(&self) -> &[String] {
        &self.dietary_tags
    }

    pub fn serving_size(&self) -> u32 {
        self.serving_size
    }

    pub fn nutrition(&self) -> Option<&NutritionFacts> {
        self.nutrition.as_ref()
    }

    /// Copy of this recipe with the scaled parts swapped in
    pub(crate) fn rescaled(
        &self,
        serving_size: u32,
        ingredients: Vec<String>,
        nutrition: Option<NutritionFacts>,
    ) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            ingredients,
            steps: self.steps.clone(),
            cook_time_minutes: self.cook_time_minutes,
            dietary_tags: self.dietary_tags.clone(),
            serving_size,
            nutrition,
        }
    }
}

/// Request to adjust a stored recipe to a new number of servings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRequest {
    pub recipe_id: String,
    pub new_serving_size: u32,
}

impl ScaleRequest {
    pub fn new(recipe_id: impl Into<String>, new_serving_size: u32) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            new_serving_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_servings() {
        assert_eq!(
            Recipe::new("r1", "Toast", 0),
            Err(Error::InvalidServingSize(0))
        );
    }

    #[test]
    fn test_builder_keeps_order() {
        let recipe = Recipe::new("r1", "Pancakes", 2)
            .unwrap()
            .with_ingredients(["2 cups flour", "1 egg", "salt"])
            .with_cook_time(20);
        assert_eq!(recipe.ingredients(), ["2 cups flour", "1 egg", "salt"]);
        assert_eq!(recipe.cook_time_minutes(), Some(20));
        assert!(recipe.nutrition().is_none());
    }

    #[test]
    fn test_deserialize_document() {
        let json = r#"{
            "id": "r1",
            "name": "Pancakes",
            "ingredients": ["2 cups flour"],
            "serving_size": 4,
            "nutrition": {"calories": 800, "protein": 20, "carbs": 120, "fat": 25}
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.serving_size(), 4);
        assert_eq!(recipe.nutrition().map(|n| n.calories()), Some(800));
        assert!(recipe.steps().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_zero_servings() {
        let json = r#"{"id": "r1", "name": "Pancakes", "serving_size": 0}"#;
        assert!(serde_json::from_str::<Recipe>(json).is_err());
    }
}
