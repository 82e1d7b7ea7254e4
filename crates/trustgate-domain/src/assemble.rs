//! Report assembly: freeze the corrected working copy into the wire report.

use crate::model::{Manifest, Service};
use crate::report::DomainReport;
use trustgate_types::{ArchitectureManifest, CloudService, GovernanceReport};

pub const DEFAULT_PROJECT_NAME: &str = "trustgate-app";
pub const DEFAULT_SERVICE_NAME: &str = "Unknown";
pub const DEFAULT_SERVICE_ID: &str = "unknown";
pub const DEFAULT_REGION: &str = "us-south";
pub const DEFAULT_PLAN: &str = "standard";

pub const DEFAULT_MODEL_USED: &str = "trustgate-policy-kb";
pub const DEFAULT_USAGE_PER_POLICY: u32 = 50;

/// Identity and usage accounting stamped onto every report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Provenance {
    pub model_used: String,
    pub usage_per_policy: u32,
}

impl Default for Provenance {
    fn default() -> Self {
        Self {
            model_used: DEFAULT_MODEL_USED.to_string(),
            usage_per_policy: DEFAULT_USAGE_PER_POLICY,
        }
    }
}

pub fn assemble(report: DomainReport, provenance: &Provenance) -> GovernanceReport {
    let DomainReport {
        outcome,
        violations_found,
        violations_corrected,
        remaining,
        corrected_manifest,
        active_policies,
        ..
    } = report;

    let active = u32::try_from(active_policies).unwrap_or(u32::MAX);

    GovernanceReport {
        status: outcome.status,
        violations_found,
        violations_corrected,
        final_compliance_score: outcome.score,
        // Already narrowed to recognized identifiers when the context was attached.
        applicable_frameworks: corrected_manifest.context.frameworks.clone(),
        corrected_manifest: to_architecture_manifest(&corrected_manifest),
        model_used: provenance.model_used.clone(),
        tokens_used: active.saturating_mul(provenance.usage_per_policy),
        remaining_violations: remaining,
    }
}

/// Fill every still-missing field with its documented default.
pub fn to_architecture_manifest(manifest: &Manifest) -> ArchitectureManifest {
    ArchitectureManifest {
        project_name: manifest
            .project_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        description: manifest.description.clone().unwrap_or_default(),
        services: manifest.services.iter().map(to_cloud_service).collect(),
        networking: manifest.networking().clone(),
        security_config: manifest.security().clone(),
        estimated_monthly_cost: manifest.estimated_monthly_cost,
        diagram_ascii: manifest.diagram_ascii.clone(),
    }
}

fn to_cloud_service(service: &Service) -> CloudService {
    CloudService {
        service_name: service
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        service_id: service
            .service_id
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVICE_ID.to_string()),
        role: service.role.as_str().to_string(),
        region: service
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
        plan: service
            .plan
            .clone()
            .unwrap_or_else(|| DEFAULT_PLAN.to_string()),
    }
}
