//! Text and JSON rendering for the CLI

use portion_core::{format_quantity_with, Error, FormatOptions, ParsedIngredient, Recipe};
use serde::Serialize;
use std::fmt::Write;

/// Result of processing one input line
#[derive(Serialize)]
pub struct LineReport {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parsed: Option<ParsedIngredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl LineReport {
    /// Blank line, echoed as is
    pub fn passthrough(input: &str) -> Self {
        Self::scaled(input, input.to_string())
    }

    pub fn scaled(input: &str, output: String) -> Self {
        Self {
            input: input.to_string(),
            output: Some(output),
            parsed: None,
            error: None,
        }
    }

    pub fn parsed(input: &str, parsed: ParsedIngredient) -> Self {
        Self {
            input: input.to_string(),
            output: None,
            parsed: Some(parsed),
            error: None,
        }
    }

    pub fn failed(input: &str, error: Error) -> Self {
        Self {
            input: input.to_string(),
            output: None,
            parsed: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn print_text(&self) {
        if let Some(output) = &self.output {
            println!("{output}");
        } else if let Some(p) = &self.parsed {
            println!(
                "quantity={} unit={:?} name={:?}",
                p.quantity(),
                p.unit(),
                p.name()
            );
        } else if let Some(error) = &self.error {
            eprintln!("error: {:?}: {error}", self.input);
        }
    }
}

/// Human-readable recipe card
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (serves {})", recipe.name(), recipe.serving_size());
    if let Some(minutes) = recipe.cook_time_minutes() {
        let _ = writeln!(out, "Cook time: {minutes} min");
    }
    if !recipe.dietary_tags().is_empty() {
        let _ = writeln!(out, "Tags: {}", recipe.dietary_tags().join(", "));
    }

    let _ = writeln!(out, "\nIngredients:");
    for line in recipe.ingredients() {
        let _ = writeln!(out, "  {line}");
    }

    if !recipe.steps().is_empty() {
        let _ = writeln!(out, "\nSteps:");
        for (i, step) in recipe.steps().iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", i + 1);
        }
    }

    if let Some(n) = recipe.nutrition() {
        let grams = FormatOptions {
            max_decimal_places: 1,
            use_fractions: false,
            ..FormatOptions::default()
        };
        let _ = writeln!(
            out,
            "\nNutrition: {} kcal, protein {} g, carbs {} g, fat {} g",
            n.calories(),
            format_quantity_with(n.protein(), &grams),
            format_quantity_with(n.carbs(), &grams),
            format_quantity_with(n.fat(), &grams),
        );
    }
    out
}
