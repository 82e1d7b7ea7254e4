use anyhow::Context;
use trustgate_render::{RenderableReport, RenderableSeverity, RenderableStatus, RenderableViolation};
use trustgate_types::{PolicyViolation, Severity, StageResult, StageStatus};

pub fn parse_stage_json(text: &str) -> anyhow::Result<StageResult> {
    serde_json::from_str(text).context("parse stage result json")
}

pub fn serialize_stage(stage: &StageResult) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(stage).context("serialize stage result")?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Map stage status to exit code: 0 = passed/corrected, 2 = failed.
pub fn stage_exit_code(status: StageStatus) -> i32 {
    match status {
        StageStatus::Passed => 0,
        StageStatus::Corrected => 0,
        StageStatus::Failed => 2,
    }
}

pub fn to_renderable(stage: &StageResult) -> RenderableReport {
    let status = match stage.status {
        StageStatus::Passed => RenderableStatus::Passed,
        StageStatus::Corrected => RenderableStatus::Corrected,
        StageStatus::Failed => RenderableStatus::Failed,
    };

    let Some(report) = &stage.result else {
        return RenderableReport {
            stage_name: stage.stage_name.clone(),
            status,
            score: None,
            frameworks: Vec::new(),
            violations: Vec::new(),
            violations_corrected: 0,
            remaining: Vec::new(),
            error: stage.error.clone(),
        };
    };

    let violations = report
        .violations_found
        .iter()
        .map(|found| {
            // Prefer the corrected twin so the applied fix is shown next to the finding.
            let fixed = report
                .violations_corrected
                .iter()
                .find(|c| c.policy_id == found.policy_id);
            renderable_violation(found, fixed)
        })
        .collect();

    RenderableReport {
        stage_name: stage.stage_name.clone(),
        status,
        score: Some(report.final_compliance_score),
        frameworks: report
            .applicable_frameworks
            .iter()
            .map(|f| f.as_str().to_string())
            .collect(),
        violations,
        violations_corrected: report.violations_corrected.len(),
        remaining: report.remaining_violations.clone(),
        error: stage.error.clone(),
    }
}

fn renderable_violation(
    found: &PolicyViolation,
    fixed: Option<&PolicyViolation>,
) -> RenderableViolation {
    RenderableViolation {
        severity: match found.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Critical => RenderableSeverity::Critical,
        },
        policy_id: found.policy_id.clone(),
        policy_name: found.policy_name.clone(),
        framework: found.framework.as_str().to_string(),
        detected_issue: found.detected_issue.clone(),
        auto_correction: fixed
            .and_then(|f| f.auto_correction.clone())
            .or_else(|| found.auto_correction.clone()),
    }
}
