//! Error types emitted by the bookmatch CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use bookmatch_data::DataError;
use bookmatch_rank::EvaluationError;
use thiserror::Error;

/// Errors emitted by the bookmatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Loading inputs or writing reports failed.
    #[error(transparent)]
    Data(#[from] Box<DataError>),
    /// The evaluation pipeline rejected its inputs.
    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
    /// Serializing the summary failed.
    #[error("failed to serialize evaluation summary: {0}")]
    SerializeSummary(#[source] serde_json::Error),
    /// Writing the summary failed.
    #[error("failed to write evaluation summary: {0}")]
    WriteSummary(#[source] std::io::Error),
}

impl From<DataError> for CliError {
    fn from(err: DataError) -> Self {
        Self::Data(Box::new(err))
    }
}
