//! Quill CLI
//!
//! Build, combine and inspect CSS selectors from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use quill_common::warning::warn_once;
use quill_exercises::{Rectangle, from_json, rectangle, to_json};
use quill_selector::{Combinator, Fragment, SelectorBuilder, combine, selector};

/// Quill: fluent CSS selector builder with grammar-order validation
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build a simple selector (fragments must be in grammar order)
    quill selector a '[href$=".png"]' :focus

    # Show the fragment set as JSON, plus its specificity
    quill selector --json --specificity div '#main' .container

    # Combine two selectors
    quill combine 'div#main' '>' 'p.lead'

    # Rectangle area, or the rectangle as JSON
    quill rectangle 10 20
    quill rectangle --json 10 20

    # Area of a rectangle given as JSON
    quill json '{"width": 3, "height": 4}'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a simple selector from fragments, applied in the order given
    Selector {
        /// Fragments such as `div`, `#id`, `.class`, `[attr]`, `:hover`, `::before`
        #[arg(value_name = "FRAGMENT", required = true)]
        fragments: Vec<String>,

        /// Print the accumulated fragment set as JSON instead of the selector
        #[arg(long)]
        json: bool,

        /// Also print the selector's specificity
        #[arg(long)]
        specificity: bool,
    },

    /// Join two rendered selectors with a combinator (' ', '>', '+', '~')
    Combine {
        /// Left-hand selector
        left: String,
        /// Combinator symbol or name (descendant, child, next-sibling, subsequent-sibling)
        combinator: String,
        /// Right-hand selector
        right: String,
    },

    /// Print the area of a rectangle
    Rectangle {
        /// Width
        width: f64,
        /// Height
        height: f64,

        /// Print the rectangle as JSON instead of its area
        #[arg(long)]
        json: bool,
    },

    /// Read a rectangle from JSON and print its area
    Json {
        /// JSON object with `width` and `height`
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Selector {
            fragments,
            json,
            specificity,
        } => {
            let builder = build_selector(&fragments)?;
            let mut output = if json {
                to_json(builder.fragments())?
            } else {
                builder.render()
            };
            if specificity {
                output.push_str(&format!("\nspecificity {}", builder.specificity()));
            }
            Ok(output)
        }

        Command::Combine {
            left,
            combinator,
            right,
        } => {
            let combinator: Combinator = combinator.parse()?;
            Ok(combine(left, combinator, right).to_string())
        }

        Command::Rectangle {
            width,
            height,
            json,
        } => {
            let rect = rectangle(width, height);
            if width < 0.0 || height < 0.0 {
                let _ = warn_once("CLI", &format!("negative dimension in {width}x{height}"));
            }
            if json {
                Ok(to_json(&rect)?)
            } else {
                Ok(rect.area().to_string())
            }
        }

        Command::Json { text } => {
            let rect: Rectangle = from_json(&text).context("expected {\"width\": .., \"height\": ..}")?;
            Ok(rect.area().to_string())
        }
    }
}

/// Apply each textual fragment in order, stopping at the first rejection.
fn build_selector(tokens: &[String]) -> Result<SelectorBuilder> {
    tokens.iter().try_fold(selector(), |builder, token| {
        let fragment: Fragment = token.parse()?;
        builder
            .push(fragment)
            .with_context(|| format!("cannot add {token:?}"))
    })
}
