//! Profiling and scoring for data quality assessment.
//!
//! [`profile`] computes dataset-wide statistics; [`score`] folds them together
//! with rule results into a single bounded [`QualityScore`](dq_model::QualityScore).

pub mod profile;
pub mod score;

pub use profile::profile;
pub use score::{
    DUPLICATE_WEIGHT, NULL_WEIGHT, RULE_VIOLATION_WEIGHT, score, score_breakdown,
};
