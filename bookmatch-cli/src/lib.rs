//! Command-line interface for the bookmatch recommendation experiments.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod evaluate;

pub use error::CliError;
use evaluate::{EvaluateArgs, run_evaluate};

const ARG_BOOKS: &str = "books";
const ARG_RATINGS: &str = "ratings";
const ARG_USERS: &str = "users";
const ARG_SAMPLE: &str = "sample";
const ARG_SEED: &str = "seed";
const ARG_OUTPUT_DIR: &str = "output-dir";
const ARG_STRATEGY: &str = "strategy";
const ENV_BOOKS: &str = "BOOKMATCH_CMDS_EVALUATE_BOOKS";
const ENV_RATINGS: &str = "BOOKMATCH_CMDS_EVALUATE_RATINGS";

/// Run the bookmatch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, inputs
/// cannot be loaded, or the summary cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Evaluate(args) => run_evaluate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "bookmatch",
    about = "Content-based book recommendation experiments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank suggestions for sampled users and compare the metrics.
    Evaluate(EvaluateArgs),
}

#[cfg(test)]
mod tests;
