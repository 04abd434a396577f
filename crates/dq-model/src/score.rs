//! Quality score types.
//!
//! A [`QualityScore`] is always within `[0.0, 100.0]` and carries one decimal
//! place. Rounding is half away from zero, so `92.25` becomes `92.3` and
//! `-0.05` clamps to `0.0` before rounding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bounded, rounded summary of dataset fitness-for-use.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityScore(f64);

impl QualityScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Clamp `raw` into range and round to one decimal place.
    ///
    /// A NaN input yields the minimum score.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(Self::MIN);
        }
        let clamped = raw.clamp(Self::MIN, Self::MAX);
        Self((clamped * 10.0).round() / 10.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for QualityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Per-signal penalties that make up a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub duplicate_penalty: f64,
    pub null_penalty: f64,
    pub rule_penalty: f64,
    /// `100 - total_penalty` before clamping and rounding.
    pub raw: f64,
    pub score: QualityScore,
}

impl ScoreBreakdown {
    pub fn from_penalties(duplicate_penalty: f64, null_penalty: f64, rule_penalty: f64) -> Self {
        let mut penalty = 0.0;
        penalty += duplicate_penalty;
        penalty += null_penalty;
        penalty += rule_penalty;
        let raw = QualityScore::MAX - penalty;
        Self {
            duplicate_penalty,
            null_penalty,
            rule_penalty,
            raw,
            score: QualityScore::from_raw(raw),
        }
    }

    pub fn total_penalty(&self) -> f64 {
        self.duplicate_penalty + self.null_penalty + self.rule_penalty
    }
}
