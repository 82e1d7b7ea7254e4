use crate::IntakeDefaults;
use crate::error::IntakeError;
use trustgate_domain::model::{AuditContext, Manifest, Service, ServiceRole};
use trustgate_domain::resolve_frameworks;
use trustgate_types::{IntentResult, ManifestInput, ServiceInput, Sensitivity};

pub(crate) fn to_manifest(input: ManifestInput, context: AuditContext) -> Manifest {
    Manifest {
        project_name: input.project_name,
        description: input.description,
        services: input
            .services
            .unwrap_or_default()
            .into_iter()
            .map(to_service)
            .collect(),
        networking: input.networking,
        security: input.security_config,
        estimated_monthly_cost: input.estimated_monthly_cost,
        diagram_ascii: input.diagram_ascii,
        context,
    }
}

fn to_service(input: ServiceInput) -> Service {
    Service {
        role: ServiceRole::parse(input.role.as_deref()),
        name: input.service_name,
        service_id: input.service_id,
        region: input.region,
        plan: input.plan,
    }
}

pub(crate) fn to_context(
    intent: &IntentResult,
    defaults: &IntakeDefaults,
) -> Result<AuditContext, IntakeError> {
    let sensitivity = match intent.detected_sensitivity.as_deref().map(str::trim) {
        None | Some("") => {
            tracing::debug!(default = %defaults.sensitivity, "no sensitivity classified");
            defaults.sensitivity
        }
        Some(raw) => Sensitivity::parse(raw).ok_or_else(|| IntakeError::UnknownSensitivity {
            value: raw.to_string(),
        })?,
    };

    let frameworks = match &intent.applicable_frameworks {
        None => defaults.frameworks.clone(),
        Some(requested) => {
            let resolved = resolve_frameworks(requested);
            if resolved.len() < requested.len() {
                tracing::debug!(
                    requested = requested.len(),
                    recognized = resolved.len(),
                    "dropped unrecognized or duplicate frameworks"
                );
            }
            resolved
        }
    };

    Ok(AuditContext {
        sensitivity,
        frameworks,
    })
}
