use crate::{RenderableReport, RenderableSeverity};

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} title={policy_id}::[{framework}] {name}: {issue}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for v in &report.violations {
        let level = match v.severity {
            RenderableSeverity::Critical => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let message = escape_data(&format!(
            "[{}] {}: {}",
            v.framework, v.policy_name, v.detected_issue
        ));

        out.push(format!(
            "::{} title={}::{}",
            level,
            escape_property(&v.policy_id),
            message
        ));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
