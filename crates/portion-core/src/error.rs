//! Error kinds returned by parsing and scaling

use thiserror::Error;

/// Result alias used throughout portion-core
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the core can report. Nothing is retried or defaulted internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The ingredient line was empty or whitespace only
    #[error("ingredient line is empty")]
    EmptyIngredientLine,

    /// A numeric token was present but could not be turned into a quantity
    #[error("invalid quantity '{token}': {reason}")]
    InvalidQuantity { token: String, reason: String },

    /// Scale factor was zero, negative, or not finite
    #[error("invalid scale factor {0}: must be a positive number")]
    InvalidScaleFactor(f64),

    /// Serving size was zero
    #[error("invalid serving size {0}: must be a positive integer")]
    InvalidServingSize(u32),

    /// No recipe is stored under the requested id
    #[error("recipe not found: {0}")]
    RecipeNotFound(String),
}

impl Error {
    pub(crate) fn invalid_quantity(token: &str, reason: impl Into<String>) -> Self {
        Error::InvalidQuantity {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}
