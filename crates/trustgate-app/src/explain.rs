//! The `explain` use case: look up policy documentation in the built-in registry.

use trustgate_domain::policy::{get_policies_for_frameworks, Policy, PolicyRegistry};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found the policy.
    Found(&'static Policy),
    /// Unknown identifier; includes every registered policy id.
    NotFound {
        identifier: String,
        available_policy_ids: Vec<&'static str>,
    },
}

/// Look up a policy by id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let registry = PolicyRegistry::builtin();
    match registry.get(identifier) {
        Some(policy) => ExplainOutput::Found(policy),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_policy_ids: registry.list_all().iter().map(|p| p.id).collect(),
        },
    }
}

/// Policies the selector activates for raw framework identifiers (baseline always included).
pub fn list_policies<S: AsRef<str>>(frameworks: &[S]) -> Vec<&'static Policy> {
    get_policies_for_frameworks(frameworks)
}

/// Format a policy for terminal display.
pub fn format_explanation(policy: &Policy) -> String {
    let mut out = String::new();

    out.push_str(policy.name);
    out.push('\n');
    out.push_str(&"=".repeat(policy.name.len()));
    out.push_str("\n\n");
    out.push_str(&format!("Policy:    {}\n", policy.id));
    out.push_str(&format!("Framework: {}\n", policy.framework));
    out.push_str(&format!("Severity:  {}\n\n", policy.severity));
    out.push_str(policy.description);
    out.push_str("\n\n");
    out.push_str("Automated correction\n");
    out.push_str("--------------------\n");
    out.push_str(policy.correction_description);
    out.push('\n');

    out
}

/// One line per policy: `<id>  <severity>  <framework>  <name>`.
pub fn format_policy_list(policies: &[&Policy]) -> String {
    let width = policies.iter().map(|p| p.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for p in policies {
        out.push_str(&format!(
            "{:<width$}  {:<8}  {:<12}  {}\n",
            p.id,
            p.severity.as_str(),
            p.framework.as_str(),
            p.name,
        ));
    }
    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, policy_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown policy id: {}\n\n", identifier));
    out.push_str("Available policy ids:\n");
    for id in policy_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustgate_types::ids;

    #[test]
    fn explain_known_policy() {
        let output = run_explain(ids::POLICY_PRIVACY_EU_RESIDENCY);
        let policy = unwrap_found(output);
        let formatted = format_explanation(policy);
        assert!(formatted.starts_with("EU Data Residency\n================="));
        assert!(formatted.contains("Framework: EU-privacy"));
        assert!(formatted.contains("Severity:  critical"));
        assert!(formatted.contains("Automated correction"));
        assert!(formatted.contains("eu-gb"));
    }

    #[test]
    fn explain_unknown() {
        match run_explain("not.a_policy") {
            ExplainOutput::NotFound {
                identifier,
                available_policy_ids,
            } => {
                assert_eq!(identifier, "not.a_policy");
                assert_eq!(available_policy_ids.len(), 8);
                assert_eq!(available_policy_ids[0], ids::POLICY_HEALTH_VPC_ISOLATION);
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["policy.one", "policy.two"]);
        assert!(formatted.contains("Unknown policy id: missing"));
        assert!(formatted.contains("  - policy.one\n"));
        assert!(formatted.contains("  - policy.two\n"));
    }

    #[test]
    fn policy_list_includes_baseline_for_any_request() {
        let listed = list_policies(&["GDPR"]);
        let text = format_policy_list(&listed);
        assert!(text.contains(ids::POLICY_BASELINE_ENCRYPTION_IN_TRANSIT));
        assert!(text.contains(ids::POLICY_PRIVACY_EU_RESIDENCY));
        assert!(!text.contains(ids::POLICY_HEALTH_AUDIT_LOGGING));
        assert_eq!(text.lines().count(), 5);
    }

    fn unwrap_found(output: ExplainOutput) -> &'static Policy {
        match output {
            ExplainOutput::Found(policy) => policy,
            _ => panic!("expected Found"),
        }
    }
}
