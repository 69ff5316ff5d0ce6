//! Structured ingredient line

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Unit;
use crate::error::{Error, Result};
use crate::format;

/// One ingredient line split into quantity, unit and name.
///
/// A quantity of `0.0` means the line carried no discernible quantity
/// ("salt", "pepper to taste"). `unit` is lowercase or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawIngredient")]
pub struct ParsedIngredient {
    quantity: f64,
    unit: String,
    name: String,
}

#[derive(Deserialize)]
struct RawIngredient {
    quantity: f64,
    #[serde(default)]
    unit: String,
    name: String,
}

impl TryFrom<RawIngredient> for ParsedIngredient {
    type Error = Error;

    fn try_from(raw: RawIngredient) -> Result<Self> {
        ParsedIngredient::new(raw.quantity, raw.unit, raw.name)
    }
}

impl ParsedIngredient {
    /// Build an ingredient, rejecting negative or non-finite quantities
    pub fn new(quantity: f64, unit: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(Error::invalid_quantity(
                &quantity.to_string(),
                "quantity must be a non-negative number",
            ));
        }
        Ok(Self {
            quantity,
            unit: unit.into().to_lowercase(),
            name: name.into().trim().to_string(),
        })
    }

    /// Ingredient with no quantity and no unit, only a name
    pub(crate) fn unquantified(name: impl Into<String>) -> Self {
        Self {
            quantity: 0.0,
            unit: String::new(),
            name: name.into(),
        }
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the line carried a quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity > 0.0
    }

    /// The registry unit behind `unit`, if it is one
    pub fn known_unit(&self) -> Option<Unit> {
        Unit::parse(&self.unit)
    }

    /// Same ingredient with its quantity multiplied by `factor`.
    /// Callers validate `factor > 0` first.
    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            quantity: self.quantity * factor,
            unit: self.unit.clone(),
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format::format_ingredient(self))
    }
}
