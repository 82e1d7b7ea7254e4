use crate::model::Manifest;
use trustgate_types::{PolicyViolation, Severity, StageStatus};

pub const SCORE_PASSED: f64 = 100.0;
pub const SCORE_FAILED: f64 = 40.0;
/// A fully corrected architecture never scores below this.
pub const SCORE_CORRECTED_FLOOR: f64 = 60.0;
pub const CRITICAL_PENALTY: f64 = 8.0;
pub const WARNING_PENALTY: f64 = 3.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub critical: u32,
    pub warning: u32,
    pub info: u32,
}

impl SeverityCounts {
    pub fn from_violations(violations: &[PolicyViolation]) -> Self {
        let mut counts = SeverityCounts::default();
        for v in violations {
            match v.severity {
                Severity::Critical => counts.critical += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub status: StageStatus,
    pub score: f64,
}

/// Score of a fully corrected audit. Info findings are free.
pub fn corrected_score(counts: &SeverityCounts) -> f64 {
    let penalty = CRITICAL_PENALTY * f64::from(counts.critical)
        + WARNING_PENALTY * f64::from(counts.warning);
    (SCORE_PASSED - penalty).max(SCORE_CORRECTED_FLOOR)
}

/// Status state machine, computed once per audit call.
///
/// `remaining` holds policy ids the re-validation pass still saw failing; any of them demotes
/// CORRECTED to FAILED.
pub fn compute_outcome(
    found: &[PolicyViolation],
    corrected: &[PolicyViolation],
    remaining: &[String],
) -> Outcome {
    if found.is_empty() {
        return Outcome {
            status: StageStatus::Passed,
            score: SCORE_PASSED,
        };
    }

    if corrected.len() == found.len() && remaining.is_empty() {
        return Outcome {
            status: StageStatus::Corrected,
            score: corrected_score(&SeverityCounts::from_violations(found)),
        };
    }

    Outcome {
        status: StageStatus::Failed,
        score: SCORE_FAILED,
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub outcome: Outcome,
    pub violations_found: Vec<PolicyViolation>,
    pub violations_corrected: Vec<PolicyViolation>,
    pub remaining: Vec<String>,
    pub corrected_manifest: Manifest,
    pub active_policies: usize,
    pub counts: SeverityCounts,
}
