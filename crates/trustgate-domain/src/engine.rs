use crate::error::EngineError;
use crate::model::Manifest;
use crate::policy::Policy;
use crate::report::{compute_outcome, DomainReport, SeverityCounts};
use trustgate_types::PolicyViolation;

/// Result of the correction pass.
#[derive(Clone, Debug)]
pub struct Correction {
    pub manifest: Manifest,
    /// Positional transform of the violations passed in, each carrying its correction note.
    pub corrected: Vec<PolicyViolation>,
}

/// Audit, correct, re-validate and score one manifest against an active policy set.
///
/// The input manifest is never mutated; the corrected copy is returned inside the report.
pub fn evaluate(manifest: &Manifest, policies: &[&Policy]) -> Result<DomainReport, EngineError> {
    tracing::debug!(
        policies = policies.len(),
        sensitivity = %manifest.sensitivity(),
        "evaluating manifest"
    );

    let found = audit(manifest, policies);

    let (corrected_manifest, corrected, remaining) = if found.is_empty() {
        (manifest.clone(), Vec::new(), Vec::new())
    } else {
        tracing::info!(count = found.len(), "attempting auto-correction");
        let Correction {
            manifest: corrected_manifest,
            corrected,
        } = correct(manifest, &found, policies)?;

        let remaining = revalidate(&corrected_manifest, policies);
        (corrected_manifest, corrected, remaining)
    };

    let outcome = compute_outcome(&found, &corrected, &remaining);
    let counts = SeverityCounts::from_violations(&found);

    Ok(DomainReport {
        outcome,
        violations_found: found,
        violations_corrected: corrected,
        remaining,
        corrected_manifest,
        active_policies: policies.len(),
        counts,
    })
}

/// Pass 1: one violation per failing policy, in policy order.
pub fn audit(manifest: &Manifest, policies: &[&Policy]) -> Vec<PolicyViolation> {
    failing(manifest, policies)
        .into_iter()
        .map(|policy| {
            tracing::warn!(
                policy_id = policy.id,
                severity = %policy.severity,
                "violation: {}",
                policy.name
            );
            violation_for(policy)
        })
        .collect()
}

/// Apply each violation's correction to a single working copy, strictly in violation order.
///
/// Later corrections see the state earlier ones left behind.
pub fn correct(
    manifest: &Manifest,
    violations: &[PolicyViolation],
    policies: &[&Policy],
) -> Result<Correction, EngineError> {
    let mut working = manifest.clone();
    let mut corrected = Vec::with_capacity(violations.len());

    for violation in violations {
        let policy = policies
            .iter()
            .find(|p| p.id == violation.policy_id)
            .ok_or_else(|| EngineError::UnresolvedPolicy {
                policy_id: violation.policy_id.clone(),
            })?;

        working = policy.apply(working);
        tracing::info!(
            policy_id = policy.id,
            "auto-corrected: {}",
            policy.correction_description
        );

        corrected.push(PolicyViolation {
            auto_correction: Some(policy.correction_description.to_string()),
            ..violation.clone()
        });
    }

    Ok(Correction {
        manifest: working,
        corrected,
    })
}

/// Pass 2: ids of policies still failing on the corrected manifest.
pub fn revalidate(manifest: &Manifest, policies: &[&Policy]) -> Vec<String> {
    let remaining: Vec<String> = failing(manifest, policies)
        .into_iter()
        .map(|p| p.id.to_string())
        .collect();

    if !remaining.is_empty() {
        tracing::error!(?remaining, "post-correction violations remain");
    }
    remaining
}

fn violation_for(policy: &Policy) -> PolicyViolation {
    PolicyViolation {
        policy_id: policy.id.to_string(),
        policy_name: policy.name.to_string(),
        severity: policy.severity,
        framework: policy.framework,
        description: policy.description.to_string(),
        detected_issue: format!(
            "Policy '{}' failed validation on the proposed architecture.",
            policy.name
        ),
        auto_correction: None,
    }
}

#[cfg(not(feature = "parallel"))]
fn failing<'p>(manifest: &Manifest, policies: &[&'p Policy]) -> Vec<&'p Policy> {
    policies
        .iter()
        .copied()
        .filter(|p| !p.passes(manifest))
        .collect()
}

// Predicates are pure, so evaluation order does not matter; collection keeps policy order.
#[cfg(feature = "parallel")]
fn failing<'p>(manifest: &Manifest, policies: &[&'p Policy]) -> Vec<&'p Policy> {
    use rayon::prelude::*;

    policies
        .par_iter()
        .copied()
        .filter(|p| !p.passes(manifest))
        .collect()
}
