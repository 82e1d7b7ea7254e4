use crate::model::{AuditContext, Manifest, Service, ServiceRole};
use trustgate_types::{Framework, NetworkingConfig, SecurityConfig, Sensitivity};

pub fn manifest(sensitivity: Sensitivity, frameworks: &[Framework]) -> Manifest {
    Manifest {
        project_name: Some("demo".to_string()),
        description: Some("demo architecture".to_string()),
        context: AuditContext {
            sensitivity,
            frameworks: frameworks.to_vec(),
        },
        ..Manifest::default()
    }
}

pub fn service(name: &str, role: ServiceRole, region: Option<&str>) -> Service {
    Service {
        name: Some(name.to_string()),
        service_id: Some(format!("{name}-id")),
        role,
        region: region.map(str::to_string),
        plan: Some("standard".to_string()),
    }
}

pub fn database(region: &str) -> Service {
    service("db", ServiceRole::Database, Some(region))
}

pub fn hosting() -> Service {
    service("app", ServiceRole::Hosting, Some("us-south"))
}

/// Every control on. Passes every built-in policy as long as databases sit in EU regions.
pub fn hardened(mut manifest: Manifest) -> Manifest {
    manifest.networking = Some(NetworkingConfig {
        vpc_enabled: true,
        subnet_isolation: true,
        private_endpoints: true,
        ..NetworkingConfig::default()
    });
    manifest.security = Some(SecurityConfig {
        encryption_at_rest: true,
        encryption_in_transit: true,
        audit_logging: true,
        iam_policies: true,
        ..SecurityConfig::default()
    });
    manifest
}

/// Only encryption in transit on: clean for `public` data under any framework set.
pub fn transit_only(mut manifest: Manifest) -> Manifest {
    manifest.security_mut().encryption_in_transit = true;
    manifest
}
