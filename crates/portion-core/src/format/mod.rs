//! Render parsed ingredients back into text
//!
//! Common cooking fractions (halves, thirds, quarters, eighths) print as
//! vulgar fractions; everything else prints as a trimmed decimal.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ParsedIngredient;

/// Denominators tried, in order, when looking for a vulgar fraction
const DENOMINATORS: [u32; 4] = [2, 3, 4, 8];

/// Knobs for quantity rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// How close the fractional part must be to n/d to print as a fraction
    pub fraction_tolerance: f64,
    /// Decimal places kept when no fraction fits
    pub max_decimal_places: u32,
    /// Print "1/2" rather than "0.5" where possible
    pub use_fractions: bool,
}

impl Default for FormatOptions {
    /// Settings under which `parse(format(p))` reproduces `p` to within 1e-6
    fn default() -> Self {
        Self {
            fraction_tolerance: 1e-6,
            max_decimal_places: 6,
            use_fractions: true,
        }
    }
}

/// Format with default options
pub fn format_ingredient(p: &ParsedIngredient) -> String {
    format_ingredient_with(p, &FormatOptions::default())
}

/// `<quantity> <unit> <name>`, dropping the unit when empty and the
/// quantity when zero.
pub fn format_ingredient_with(p: &ParsedIngredient, opts: &FormatOptions) -> String {
    if !p.has_quantity() {
        return p.name().to_string();
    }

    let quantity = format_quantity_with(p.quantity(), opts);
    if p.unit().is_empty() {
        format!("{} {}", quantity, p.name())
    } else {
        format!("{} {} {}", quantity, p.unit(), p.name())
    }
}

/// Render a single quantity: "1 1/2", "3/4", "2", "2.25"
pub fn format_quantity_with(quantity: f64, opts: &FormatOptions) -> String {
    let whole = quantity.round();
    if (quantity - whole).abs() < opts.fraction_tolerance && whole >= 1.0 {
        return format_decimal(whole, 0);
    }

    if opts.use_fractions {
        if let Some(fraction) = as_vulgar_fraction(quantity, opts.fraction_tolerance) {
            return fraction;
        }
    }

    format_decimal(quantity, opts.max_decimal_places)
}

fn as_vulgar_fraction(quantity: f64, tolerance: f64) -> Option<String> {
    let whole = quantity.trunc();
    let frac = quantity - whole;

    DENOMINATORS.iter().find_map(|&d| {
        let d = f64::from(d);
        let numerator = (frac * d).round();
        let close = (frac - numerator / d).abs() < tolerance;
        (close && numerator >= 1.0 && numerator < d).then(|| {
            if whole >= 1.0 {
                format!("{} {}/{}", format_decimal(whole, 0), numerator, d)
            } else {
                format!("{}/{}", numerator, d)
            }
        })
    })
}

/// Decimal with trailing zeros stripped: 2.0 -> "2", 2.250 -> "2.25".
///
/// A positive amount never prints as "0", which would read back as no
/// quantity; amounts too small for `places` keep their significant digits.
fn format_decimal(n: f64, places: u32) -> String {
    let Some(d) = Decimal::from_f64(n) else {
        // Beyond Decimal's range; plain float formatting is exact enough there
        return format!("{}", n);
    };

    let rounded = d.round_dp(places);
    if !rounded.is_zero() || n == 0.0 {
        return rounded.normalize().to_string();
    }
    match d.round_sf(SIGNIFICANT_DIGITS) {
        Some(small) if !small.is_zero() => small.normalize().to_string(),
        // Below Decimal's smallest scale; f64 Display never uses exponents
        _ => format!("{}", n),
    }
}

/// Significant digits kept for amounts that round to zero
const SIGNIFICANT_DIGITS: u32 = 6;
