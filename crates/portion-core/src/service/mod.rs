//! "Adjust serving size" use case at the edge of the core
//!
//! Looks a recipe up by id and hands it to [`RecipeScaler`]. Storage is
//! behind [`RecipeRepository`]; only an in-memory store ships here.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::scale::RecipeScaler;
use crate::types::{Recipe, ScaleRequest};

/// Source of recipes by id
pub trait RecipeRepository {
    fn find(&self, id: &str) -> Option<Recipe>;
}

/// Recipes held in a map keyed by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipes {
    recipes: HashMap<String, Recipe>,
}

impl InMemoryRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a recipe, replacing any with the same id
    pub fn insert(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.id().to_string(), recipe);
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for InMemoryRecipes {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut store = Self::new();
        for recipe in iter {
            store.insert(recipe);
        }
        store
    }
}

impl RecipeRepository for InMemoryRecipes {
    fn find(&self, id: &str) -> Option<Recipe> {
        self.recipes.get(id).cloned()
    }
}

/// Fetch-then-scale interactor
pub struct AdjustServingSize<R> {
    repository: R,
    scaler: RecipeScaler,
}

impl<R: RecipeRepository> AdjustServingSize<R> {
    pub fn new(repository: R) -> Self {
        Self::with_scaler(repository, RecipeScaler::new())
    }

    pub fn with_scaler(repository: R, scaler: RecipeScaler) -> Self {
        Self { repository, scaler }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Scale the stored recipe named by `request`
    pub fn execute(&self, request: &ScaleRequest) -> Result<Recipe> {
        if request.new_serving_size == 0 {
            return Err(Error::InvalidServingSize(request.new_serving_size));
        }
        let recipe = self
            .repository
            .find(&request.recipe_id)
            .ok_or_else(|| Error::RecipeNotFound(request.recipe_id.clone()))?;
        self.scaler.scale(&recipe, request.new_serving_size)
    }
}
