//! Evaluate command implementation for the bookmatch CLI.

use std::io::Write;

use bookmatch_core::{SelectionStrategy, UserId};
use bookmatch_data::{
    DEFAULT_SAMPLE_SIZE, ReportKind, ReportWriter, keyword_index, load_books, load_ratings,
    load_users, sample_users,
};
use bookmatch_rank::{Evaluation, EvaluationConfig, Evaluator, OverlapSummary};
use bookmatch_scorer::SimilarityScorer;
use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_BOOKS, ARG_OUTPUT_DIR, ARG_RATINGS, ARG_SAMPLE, ARG_SEED, ARG_STRATEGY, ARG_USERS,
    CliError, ENV_BOOKS, ENV_RATINGS,
};

/// Directory reports land in when none is configured.
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "results";
/// Sampling seed used when none is configured.
pub(crate) const DEFAULT_SEED: u64 = 0;

/// CLI arguments for the `evaluate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load the Book-Crossing books and ratings exports, sample \
                 users, rank suggestions for each of them under the Jaccard \
                 and Dice metrics, merge both into a consensus ranking and \
                 report how much the rankings agree. Options can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Evaluate Jaccard and Dice suggestions for sampled users"
)]
#[ortho_config(prefix = "BOOKMATCH")]
pub(crate) struct EvaluateArgs {
    /// Path to the books export (`BX-Books.csv`).
    #[arg(long = ARG_BOOKS, value_name = "path")]
    #[serde(default)]
    pub(crate) books: Option<Utf8PathBuf>,
    /// Path to the ratings export (`BX-Book-Ratings.csv`).
    #[arg(long = ARG_RATINGS, value_name = "path")]
    #[serde(default)]
    pub(crate) ratings: Option<Utf8PathBuf>,
    /// Optional users export; defaults to every user with a rating.
    #[arg(long = ARG_USERS, value_name = "path")]
    #[serde(default)]
    pub(crate) users: Option<Utf8PathBuf>,
    /// Number of users to sample.
    #[arg(long = ARG_SAMPLE, value_name = "count")]
    #[serde(default)]
    pub(crate) sample: Option<usize>,
    /// Seed for reproducible sampling.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Directory receiving the per-user report files.
    #[arg(long = ARG_OUTPUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) output_dir: Option<Utf8PathBuf>,
    /// Selection policy for favourites and suggestions (`exact` or `first-fit`).
    #[arg(long = ARG_STRATEGY, value_name = "strategy")]
    #[serde(default)]
    pub(crate) strategy: Option<SelectionStrategy>,
}

impl EvaluateArgs {
    pub(crate) fn into_config(self) -> Result<EvaluateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EvaluateConfig::try_from(merged)
    }
}

/// Resolved `evaluate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EvaluateConfig {
    pub(crate) books: Utf8PathBuf,
    pub(crate) ratings: Utf8PathBuf,
    pub(crate) users: Option<Utf8PathBuf>,
    pub(crate) sample: usize,
    pub(crate) seed: u64,
    pub(crate) output_dir: Utf8PathBuf,
    pub(crate) strategy: SelectionStrategy,
}

impl TryFrom<EvaluateArgs> for EvaluateConfig {
    type Error = CliError;

    fn try_from(args: EvaluateArgs) -> Result<Self, Self::Error> {
        let books = args.books.ok_or(CliError::MissingArgument {
            field: ARG_BOOKS,
            env: ENV_BOOKS,
        })?;
        let ratings = args.ratings.ok_or(CliError::MissingArgument {
            field: ARG_RATINGS,
            env: ENV_RATINGS,
        })?;
        Ok(Self {
            books,
            ratings,
            users: args.users,
            sample: args.sample.unwrap_or(DEFAULT_SAMPLE_SIZE),
            seed: args.seed.unwrap_or(DEFAULT_SEED),
            output_dir: args
                .output_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_DIR)),
            strategy: args.strategy.unwrap_or_default(),
        })
    }
}

/// Machine-readable outcome of one `evaluate` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EvaluateSummary {
    /// Books accepted into the catalog.
    pub(crate) books: usize,
    /// Ratings accepted into the history.
    pub(crate) ratings: usize,
    /// Malformed rows skipped across all inputs.
    pub(crate) skipped_rows: usize,
    /// Selection policy in effect.
    pub(crate) strategy: SelectionStrategy,
    /// Directory holding the report files.
    pub(crate) output_dir: Utf8PathBuf,
    /// One entry per sampled user, in report index order.
    pub(crate) users: Vec<UserSummary>,
}

/// Per-user list sizes and agreement fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserSummary {
    /// Index used in the report file names.
    pub(crate) index: usize,
    /// Evaluated user.
    pub(crate) user: UserId,
    /// Favourites the profile was built from.
    pub(crate) favourites: usize,
    /// Jaccard suggestions.
    pub(crate) jaccard: usize,
    /// Dice suggestions.
    pub(crate) dice: usize,
    /// Consensus entries.
    pub(crate) golden: usize,
    /// Pairwise overlap fractions.
    pub(crate) overlap: OverlapSummary,
}

impl UserSummary {
    fn new(index: usize, evaluation: &Evaluation) -> Self {
        Self {
            index,
            user: evaluation.user.clone(),
            favourites: evaluation.profile.favorites().len(),
            jaccard: evaluation.jaccard.len(),
            dice: evaluation.dice.len(),
            golden: evaluation.golden.len(),
            overlap: evaluation.overlap,
        }
    }
}

pub(super) fn run_evaluate(args: EvaluateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_evaluate_with(args, &mut stdout)
}

pub(super) fn run_evaluate_with(
    args: EvaluateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let summary = execute_evaluate(&config)?;
    write_summary(writer, &summary)
}

fn execute_evaluate(config: &EvaluateConfig) -> Result<EvaluateSummary, CliError> {
    let books = load_books(&config.books)?;
    let ratings = load_ratings(&config.ratings)?;
    let mut skipped_rows = books.report.skipped + ratings.report.skipped;

    let population = match &config.users {
        Some(path) => {
            let users = load_users(path)?;
            skipped_rows += users.report.skipped;
            users.data
        }
        None => ratings.data.users(),
    };
    let sample = sample_users(&population, config.sample, config.seed);
    info!(
        "Sampled {} of {} users with seed {}",
        sample.len(),
        population.len(),
        config.seed
    );

    let keywords = keyword_index(&books.data);
    let evaluator = Evaluator::with_config(
        SimilarityScorer::jaccard(),
        SimilarityScorer::dice(),
        EvaluationConfig {
            strategy: config.strategy,
            ..EvaluationConfig::default()
        },
    );
    let evaluations = evaluator.evaluate_users(&sample, &ratings.data, &books.data, &keywords)?;

    let reports = ReportWriter::create(&config.output_dir)?;
    for (index, evaluation) in evaluations.iter().enumerate() {
        reports.write(index, ReportKind::Jaccard, &evaluation.jaccard, &books.data)?;
        reports.write(index, ReportKind::Dice, &evaluation.dice, &books.data)?;
        reports.write(index, ReportKind::Golden, &evaluation.golden, &books.data)?;
    }
    info!(
        "Wrote reports for {} users to {}",
        evaluations.len(),
        reports.root()
    );

    Ok(EvaluateSummary {
        books: books.report.accepted,
        ratings: ratings.report.accepted,
        skipped_rows,
        strategy: config.strategy,
        output_dir: config.output_dir.clone(),
        users: evaluations
            .iter()
            .enumerate()
            .map(|(index, evaluation)| UserSummary::new(index, evaluation))
            .collect(),
    })
}

fn write_summary(writer: &mut dyn Write, summary: &EvaluateSummary) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(summary).map_err(CliError::SerializeSummary)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteSummary)?;
    writer.write_all(b"\n").map_err(CliError::WriteSummary)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<EvaluateConfig, CliError> {
    let merged = EvaluateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    EvaluateConfig::try_from(merged)
}
