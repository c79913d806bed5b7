//! Shine CLI - evaluate bubble files and reactive programs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shine::prelude::*;
use shine::{evaluate_all, load_program};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "shine")]
#[command(author, version, about = "Reactive-cell evaluator for bubbles and programs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the bubbles of a bubble file
    #[command(alias = "eval")]
    Bubbles {
        /// Input bubble file (JSON)
        input: PathBuf,

        /// Evaluate only the bubble this identifier or name resolves to
        #[arg(short, long)]
        target: Option<String>,

        /// Stop at the first failing bubble
        #[arg(long)]
        stop_on_error: bool,
    },

    /// Run a program file, printing as the program prints
    Run {
        /// Input program file (JSON)
        input: PathBuf,

        /// Print every variable binding after the run
        #[arg(short, long)]
        show_env: bool,
    },

    /// List the bubbles of a bubble file
    Info {
        /// Input bubble file (JSON)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bubbles {
            input,
            target,
            stop_on_error,
        } => evaluate_bubbles(&input, target.as_deref(), stop_on_error),
        Commands::Run { input, show_env } => run_program(&input, show_env),
        Commands::Info { input } => show_info(&input),
    }
}

fn open_universe(input: &Path) -> Result<Universe> {
    Universe::open(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

fn evaluate_bubbles(input: &Path, target: Option<&str>, stop_on_error: bool) -> Result<()> {
    let universe = open_universe(input)?.with_builtins();

    if let Some(target) = target {
        let value = universe
            .evaluate_reference(target)
            .with_context(|| format!("Failed to evaluate '{}'", target))?;
        println!("{}", value);
        return Ok(());
    }

    let evaluation = evaluate_all(&universe, &EvaluationOptions { stop_on_error })
        .context("Failed to evaluate bubbles")?;

    for outcome in &evaluation.outcomes {
        // Builtins are noise in a listing of the file's own bubbles
        if outcome.identifier.starts_with("builtin:") {
            continue;
        }
        match &outcome.result {
            Ok(value) => println!("{}\t{}", outcome.name, value),
            Err(e) => println!("{}\t#ERROR: {}", outcome.name, e),
        }
    }

    let stats = &evaluation.stats;
    eprintln!(
        "Evaluated {} formulas ({} errors, {} circular)",
        stats.formula_count, stats.errors, stats.circular_references
    );
    Ok(())
}

fn run_program(input: &Path, show_env: bool) -> Result<()> {
    let program =
        load_program(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    let mut env = shine::builtins::environment();
    let builtin_names: Vec<String> = env.names().into_iter().map(str::to_string).collect();

    program
        .evaluate(&mut env)
        .context("Failed to run program")?;

    if show_env {
        for name in env.names() {
            if builtin_names.iter().any(|builtin| builtin == name) {
                continue;
            }
            if let Some(cell) = env.get(name) {
                println!("{} = {}", name, cell.get());
            }
        }
    }

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let universe = open_universe(input)?;

    println!("File: {}", input.display());
    println!("Bubbles: {}", universe.len());
    println!();

    for bubble in universe.iter() {
        let position = bubble.position();
        let formula = match bubble.formula() {
            Some(formula) => format!("{:?}", formula),
            None => "-".to_string(),
        };
        println!(
            "  {} \"{}\" at ({}, {}): {}",
            bubble.identifier(),
            bubble.name(),
            position.x,
            position.y,
            formula
        );
    }

    Ok(())
}
