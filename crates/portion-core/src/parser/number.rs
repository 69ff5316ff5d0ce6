//! Leading numeric token: integer, decimal, vulgar fraction or mixed number

use pest::iterators::Pair;
use pest::Parser;

use super::{IngredientParser, Rule};
use crate::error::{Error, Result};

/// Outcome of reading the start of a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityMatch {
    /// Parsed value; `0.0` when nothing was found
    pub value: f64,
    /// Characters consumed, including surrounding whitespace
    pub consumed: usize,
}

impl QuantityMatch {
    /// Nothing numeric at the start of the input
    pub const NONE: QuantityMatch = QuantityMatch {
        value: 0.0,
        consumed: 0,
    };

    pub fn is_found(&self) -> bool {
        self.consumed > 0
    }
}

/// Read a quantity from the start of `input`.
///
/// A missing number is not an error: "salt" yields [`QuantityMatch::NONE`].
/// A number that is present but unusable ("1/0") is [`Error::InvalidQuantity`].
pub fn parse_quantity(input: &str) -> Result<QuantityMatch> {
    let Ok(mut pairs) = IngredientParser::parse(Rule::quantity, input) else {
        return Ok(QuantityMatch::NONE);
    };
    let Some(quantity) = pairs.next() else {
        return Ok(QuantityMatch::NONE);
    };

    // The grammar only matches ASCII digits, '.', '/' and blanks, so bytes == chars
    let consumed = quantity.as_str().len();
    let token = quantity.as_str().trim();
    let number = quantity
        .into_inner()
        .next()
        .ok_or_else(|| Error::invalid_quantity(token, "malformed number"))?;

    let value = match number.as_rule() {
        Rule::mixed => eval_mixed(number)?,
        Rule::fraction => eval_fraction(number)?,
        Rule::decimal => parse_f64(number.as_str())?,
        _ => return Err(Error::invalid_quantity(token, "malformed number")),
    };

    Ok(QuantityMatch { value, consumed })
}

fn eval_mixed(pair: Pair<'_, Rule>) -> Result<f64> {
    let token = pair.as_str();
    let mut inner = pair.into_inner();
    let whole = inner
        .next()
        .ok_or_else(|| Error::invalid_quantity(token, "missing whole part"))?;
    let fraction = inner
        .next()
        .ok_or_else(|| Error::invalid_quantity(token, "missing fraction"))?;
    Ok(parse_f64(whole.as_str())? + eval_fraction(fraction)?)
}

fn eval_fraction(pair: Pair<'_, Rule>) -> Result<f64> {
    let token = pair.as_str();
    let mut inner = pair.into_inner();
    let numerator = inner
        .next()
        .ok_or_else(|| Error::invalid_quantity(token, "missing numerator"))?;
    let denominator = inner
        .next()
        .ok_or_else(|| Error::invalid_quantity(token, "missing denominator"))?;

    let denominator = parse_f64(denominator.as_str())?;
    if denominator == 0.0 {
        return Err(Error::invalid_quantity(token, "zero denominator"));
    }
    Ok(parse_f64(numerator.as_str())? / denominator)
}

fn parse_f64(s: &str) -> Result<f64> {
    let value: f64 = s
        .parse()
        .map_err(|e| Error::invalid_quantity(s, format!("{e}")))?;
    if !value.is_finite() {
        return Err(Error::invalid_quantity(s, "number is too large"));
    }
    Ok(value)
}
