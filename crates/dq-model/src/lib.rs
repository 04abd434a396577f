pub mod assessment;
pub mod profile;
pub mod rule;
pub mod score;

pub use assessment::Assessment;
pub use profile::ProfileMetrics;
pub use rule::{RuleResult, RuleWarning};
pub use score::{QualityScore, ScoreBreakdown};
