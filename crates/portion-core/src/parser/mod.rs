//! Ingredient line parser using pest
//!
//! The grammar only covers the leading quantity; unit and name are split
//! off by word, since they are free text.

pub mod number;

pub use number::{parse_quantity, QuantityMatch};

use pest_derive::Parser;

use crate::error::{Error, Result};
use crate::types::unit::normalize_word;
use crate::types::{ParsedIngredient, Unit};

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct IngredientParser;

/// Linking word dropped between a unit and the ingredient ("1 cup of sugar")
const CONNECTIVE: &str = "of";

/// Parse one free-text ingredient line ("1 1/2 cups water").
///
/// Lines without a leading number are kept whole as the name with a zero
/// quantity. The returned name is never empty.
pub fn parse_ingredient(line: &str) -> Result<ParsedIngredient> {
    let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(Error::EmptyIngredientLine);
    }

    let quantity = parse_quantity(&normalized)?;
    if !quantity.is_found() {
        tracing::trace!(line = %normalized, "no leading quantity");
        return Ok(ParsedIngredient::unquantified(normalized));
    }

    let rest = normalized[quantity.consumed..].trim();
    if rest.is_empty() {
        // A bare number names nothing; keep it as text
        tracing::trace!(line = %normalized, "quantity without ingredient");
        return Ok(ParsedIngredient::unquantified(normalized));
    }

    let (unit, name) = split_unit(rest);
    let parsed = ParsedIngredient::new(quantity.value, unit, name)?;
    tracing::trace!(
        line = %normalized,
        quantity = parsed.quantity(),
        unit = parsed.unit(),
        name = parsed.name(),
        "parsed ingredient"
    );
    Ok(parsed)
}

/// Split "cups of water" into ("cups", "water").
/// A unit word with nothing after it stays part of the name.
fn split_unit(rest: &str) -> (String, &str) {
    let Some((word, tail)) = rest.split_once(' ') else {
        return (String::new(), rest);
    };
    if Unit::parse(word).is_none() {
        return (String::new(), rest);
    }
    (normalize_word(word), strip_connective(tail))
}

/// Drop every leading "of" while a word is left to name the ingredient,
/// so the printed name never starts with one and reparses the same.
fn strip_connective(mut name: &str) -> &str {
    while let Some((first, tail)) = name.split_once(' ') {
        if !first.eq_ignore_ascii_case(CONNECTIVE) {
            break;
        }
        name = tail;
    }
    name
}
