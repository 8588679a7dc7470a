//! Ranking and evaluation for the bookmatch engine.
//!
//! Scores from two [`Scorer`](bookmatch_core::Scorer) implementations are
//! reduced to bounded suggestion lists with [`TopKSelector`], merged into a
//! consensus ranking with [`build_golden`] and compared pairwise with
//! [`overlap`]. [`Evaluator`] runs the whole pipeline for one user, or for
//! many users in parallel.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod consensus;
mod error;
mod evaluator;
mod overlap;
mod select;

pub use consensus::build_golden;
pub use error::EvaluationError;
pub use evaluator::{Evaluation, EvaluationConfig, Evaluator, OverlapSummary};
pub use overlap::{DEFAULT_OVERLAP_DEPTH, effective_depth, overlap, overlap_curve};
pub use select::{DEFAULT_SUGGESTIONS, TopKSelector};
