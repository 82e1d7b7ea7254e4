use crate::{RenderableReport, RenderableSeverity, RenderableStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Trustgate governance report\n\n");
    let status = match report.status {
        RenderableStatus::Passed => "PASSED",
        RenderableStatus::Corrected => "CORRECTED",
        RenderableStatus::Failed => "FAILED",
    };
    out.push_str(&format!(
        "- Stage: {}\n- Status: **{}**\n",
        report.stage_name, status
    ));
    if let Some(score) = report.score {
        out.push_str(&format!("- Compliance score: {:.1}\n", score));
    }
    if !report.frameworks.is_empty() {
        out.push_str(&format!("- Frameworks: {}\n", report.frameworks.join(", ")));
    }
    out.push_str(&format!(
        "- Violations: {} found / {} corrected\n\n",
        report.violations.len(),
        report.violations_corrected
    ));

    if let Some(err) = &report.error {
        out.push_str(&format!("> Error: {}\n\n", err));
    }

    if report.violations.is_empty() {
        out.push_str("No violations.\n");
    } else {
        out.push_str("## Violations\n\n");
        for v in &report.violations {
            let sev = match v.severity {
                RenderableSeverity::Info => "INFO",
                RenderableSeverity::Warning => "WARNING",
                RenderableSeverity::Critical => "CRITICAL",
            };
            out.push_str(&format!(
                "- [{}] `{}` ({}) {}: {}\n",
                sev, v.policy_id, v.framework, v.policy_name, v.detected_issue
            ));
            if let Some(fix) = &v.auto_correction {
                out.push_str(&format!("  - correction: {}\n", fix));
            }
        }
    }

    if !report.remaining.is_empty() {
        out.push_str("\n## Remaining violations\n\n");
        for id in &report.remaining {
            out.push_str(&format!("- `{}`\n", id));
        }
    }

    out
}
