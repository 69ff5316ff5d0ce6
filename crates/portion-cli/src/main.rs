//! portion-cli - Command-line recipe scaler
//!
//! Usage:
//!   portion-cli "1 1/2 cups water" -x 2          # Single line
//!   echo "2 cups flour" | portion-cli -x 1.5       # Pipe mode
//!   portion-cli -f ingredients.txt -x 0.5          # File mode
//!   portion-cli -r lasagna.json -s 12              # Whole recipe
//!   portion-cli -i -x 2                            # Interactive REPL

mod output;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use portion_core::{
    parse_ingredient, scale_ingredient_line_with, AdjustServingSize, FormatOptions,
    InMemoryRecipes, Recipe, RecipeScaler, ScaleRequest,
};
use tracing_subscriber::EnvFilter;

use output::LineReport;

#[derive(Parser, Debug)]
#[command(name = "portion-cli")]
#[command(about = "Parse and scale recipe ingredient lines", long_about = None)]
struct Args {
    /// Ingredient line to scale
    line: Option<String>,

    /// Multiply quantities by this factor
    #[arg(short = 'x', long, default_value_t = 1.0)]
    factor: f64,

    /// Read ingredient lines from file
    #[arg(short, long, value_name = "FILE", conflicts_with = "recipe")]
    file: Option<PathBuf>,

    /// Interactive REPL mode
    #[arg(short, long)]
    interactive: bool,

    /// Show the parsed quantity, unit and name instead of scaling
    #[arg(short, long)]
    parse: bool,

    /// Recipe document (JSON) to scale as a whole
    #[arg(
        short,
        long,
        value_name = "FILE",
        requires = "servings",
        conflicts_with = "line"
    )]
    recipe: Option<PathBuf>,

    /// Target serving size for --recipe
    #[arg(short, long, value_name = "N")]
    servings: Option<u32>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Maximum decimal places when no fraction fits
    #[arg(long, default_value_t = 6)]
    precision: u32,

    /// Never print vulgar fractions
    #[arg(long)]
    decimal: bool,

    /// Log scaling details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            max_decimal_places: self.precision,
            use_fractions: !self.decimal,
            ..FormatOptions::default()
        }
    }
}

/// Settings shared by every line-oriented mode
struct Session {
    factor: f64,
    options: FormatOptions,
    parse_only: bool,
    json: bool,
    failures: usize,
}

impl Session {
    fn new(args: &Args) -> Self {
        Self {
            factor: args.factor,
            options: args.format_options(),
            parse_only: args.parse,
            json: args.json,
            failures: 0,
        }
    }

    fn process_and_print(&mut self, input: &str) {
        let report = self.process(input);
        if report.is_error() {
            self.failures += 1;
        }
        if self.json {
            match serde_json::to_string(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("error: {e}"),
            }
        } else {
            report.print_text();
        }
    }

    fn process(&self, input: &str) -> LineReport {
        if input.trim().is_empty() {
            return LineReport::passthrough(input);
        }
        if self.parse_only {
            return match parse_ingredient(input) {
                Ok(parsed) => LineReport::parsed(input, parsed),
                Err(e) => LineReport::failed(input, e),
            };
        }
        match scale_ingredient_line_with(input, self.factor, &self.options) {
            Ok(scaled) => LineReport::scaled(input, scaled),
            Err(e) => LineReport::failed(input, e),
        }
    }

    fn finish(&self) -> Result<()> {
        if self.failures > 0 {
            bail!("{} line(s) could not be processed", self.failures);
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Some(path) = &args.recipe {
        // `requires = "servings"` guarantees this is present
        let servings = args.servings.unwrap_or_default();
        return scale_recipe_file(path, servings, &args);
    }

    let mut session = Session::new(&args);

    if let Some(line) = &args.line {
        // Single line mode
        session.process_and_print(line);
    } else if let Some(path) = &args.file {
        // File mode
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        for line in content.lines() {
            session.process_and_print(line);
        }
    } else if args.interactive {
        run_repl(&mut session)?;
    } else if !io::stdin().is_terminal() {
        // Pipe mode (stdin is not a tty)
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            session.process_and_print(&line);
        }
    } else {
        // No input, show help
        eprintln!("Usage: portion-cli <line> [-x FACTOR]");
        eprintln!("       portion-cli -f <file> [-x FACTOR]");
        eprintln!("       portion-cli -r <recipe.json> -s <servings>");
        eprintln!("       portion-cli -i");
        eprintln!("       echo \"2 cups flour\" | portion-cli -x 2");
        std::process::exit(1);
    }

    session.finish()
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn scale_recipe_file(path: &Path, servings: u32, args: &Args) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let recipe: Recipe = serde_json::from_str(&content)
        .with_context(|| format!("invalid recipe document {}", path.display()))?;
    let request = ScaleRequest::new(recipe.id(), servings);

    let store: InMemoryRecipes = [recipe].into_iter().collect();
    let use_case =
        AdjustServingSize::with_scaler(store, RecipeScaler::with_options(args.format_options()));
    let scaled = use_case.execute(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scaled)?);
    } else {
        print!("{}", output::render_recipe(&scaled));
    }
    Ok(())
}

fn run_repl(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("portion - Recipe Scaler");
    println!("Type ingredient lines to scale. Press Ctrl+D to exit.\n");

    loop {
        print!("[x{}] > ", session.factor);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Special commands
        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "parse" => {
                session.parse_only = !session.parse_only;
                println!(
                    "Parse mode {}.",
                    if session.parse_only { "on" } else { "off" }
                );
                continue;
            }
            _ => {}
        }

        if let Some(value) = line.strip_prefix("factor ") {
            match value.trim().parse::<f64>() {
                Ok(factor) if factor.is_finite() && factor > 0.0 => {
                    session.factor = factor;
                    println!("Factor set to {factor}.");
                }
                _ => eprintln!("error: factor must be a positive number"),
            }
            continue;
        }

        session.process_and_print(line);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"
Commands:
  help         Show this help
  factor <F>   Change the scale factor
  parse        Toggle parse-only mode
  quit         Exit the REPL

Examples:
  2 cups flour         Scaled by the current factor
  1 1/2 cups water     Mixed numbers
  1/4 tsp salt         Vulgar fractions
  1 pinch of salt      Descriptor units
  pepper to taste      Lines without a quantity pass through
"#
    );
}
