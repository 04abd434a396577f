use std::path::PathBuf;

use dq_model::Assessment;
use dq_report::ReportPaths;

#[derive(Debug)]
pub struct CheckResult {
    pub input: PathBuf,
    pub assessment: Assessment,
    /// `None` when report writing was disabled.
    pub reports: Option<ReportPaths>,
    pub fail_under: Option<f64>,
}

impl CheckResult {
    pub fn below_threshold(&self) -> bool {
        self.fail_under
            .is_some_and(|threshold| self.assessment.score().value() < threshold)
    }
}
