use std::collections::BTreeMap;
use trustgate_types::{Framework, NetworkingConfig, SecurityConfig, Sensitivity};

/// Regions accepted as EU data residency.
pub const EU_REGIONS: &[&str] = &["eu-gb", "eu-de", "eu-fr"];

/// Region databases are moved to when residency has to be corrected.
pub const EU_TARGET_REGION: &str = "eu-gb";

static NO_NETWORKING: NetworkingConfig = NetworkingConfig {
    vpc_enabled: false,
    subnet_isolation: false,
    private_endpoints: false,
    extra: BTreeMap::new(),
};

static NO_SECURITY: SecurityConfig = SecurityConfig {
    encryption_at_rest: false,
    encryption_in_transit: false,
    audit_logging: false,
    iam_policies: false,
    extra: BTreeMap::new(),
};

/// The audited artifact.
///
/// Optional blocks stay optional so the corrected manifest only materializes what a correction
/// touched. Predicates read them through [`Manifest::networking`] / [`Manifest::security`], where a
/// missing block behaves as "no controls enabled".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Manifest {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub services: Vec<Service>,
    pub networking: Option<NetworkingConfig>,
    pub security: Option<SecurityConfig>,
    pub estimated_monthly_cost: Option<f64>,
    pub diagram_ascii: Option<String>,

    /// Attached by the caller before audit; never inferred here.
    pub context: AuditContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditContext {
    pub sensitivity: Sensitivity,

    /// Recognized frameworks requested for this manifest, in request order, deduplicated.
    pub frameworks: Vec<Framework>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Service {
    pub name: Option<String>,
    pub service_id: Option<String>,
    pub role: ServiceRole,
    pub region: Option<String>,
    pub plan: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ServiceRole {
    #[default]
    Hosting,
    Database,
    Messaging,
    Storage,
    Other(String),
}

impl ServiceRole {
    /// Missing roles default to `hosting`.
    pub fn parse(value: Option<&str>) -> ServiceRole {
        match value.map(str::trim) {
            None | Some("") | Some("hosting") => ServiceRole::Hosting,
            Some("database") => ServiceRole::Database,
            Some("messaging") => ServiceRole::Messaging,
            Some("storage") => ServiceRole::Storage,
            Some(other) => ServiceRole::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ServiceRole::Hosting => "hosting",
            ServiceRole::Database => "database",
            ServiceRole::Messaging => "messaging",
            ServiceRole::Storage => "storage",
            ServiceRole::Other(s) => s.as_str(),
        }
    }
}

impl Service {
    pub fn is_database(&self) -> bool {
        self.role == ServiceRole::Database
    }

    pub fn in_eu_region(&self) -> bool {
        self.region
            .as_deref()
            .is_some_and(|r| EU_REGIONS.contains(&r))
    }
}

impl Manifest {
    pub fn networking(&self) -> &NetworkingConfig {
        self.networking.as_ref().unwrap_or(&NO_NETWORKING)
    }

    pub fn security(&self) -> &SecurityConfig {
        self.security.as_ref().unwrap_or(&NO_SECURITY)
    }

    pub fn networking_mut(&mut self) -> &mut NetworkingConfig {
        self.networking.get_or_insert_with(NetworkingConfig::default)
    }

    pub fn security_mut(&mut self) -> &mut SecurityConfig {
        self.security.get_or_insert_with(SecurityConfig::default)
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.context.sensitivity
    }

    pub fn requests(&self, framework: Framework) -> bool {
        self.context.frameworks.contains(&framework)
    }

    pub fn has_database(&self) -> bool {
        self.services.iter().any(Service::is_database)
    }

    pub fn databases(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|s| s.is_database())
    }

    pub fn databases_mut(&mut self) -> impl Iterator<Item = &mut Service> {
        self.services.iter_mut().filter(|s| s.is_database())
    }
}
