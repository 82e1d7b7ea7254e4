use crate::model::{Manifest, EU_TARGET_REGION};
use crate::policy::Policy;
use trustgate_types::{ids, Framework, Severity};

pub const POLICY: Policy = Policy {
    id: ids::POLICY_PRIVACY_EU_RESIDENCY,
    name: "EU Data Residency",
    framework: Framework::EuPrivacy,
    severity: Severity::Critical,
    description: "Data subject to EU privacy regulation must be stored and processed within EU \
                  regions only. Acceptable regions: eu-gb, eu-de, eu-fr.",
    correction_description: "Migrated all database services to EU region (eu-gb) for EU privacy \
                             compliance.",
    check,
    correct,
};

fn check(manifest: &Manifest) -> bool {
    if !manifest.requests(Framework::EuPrivacy) {
        return true;
    }
    manifest.databases().all(|db| db.in_eu_region())
}

fn correct(mut manifest: Manifest) -> Manifest {
    for db in manifest.databases_mut() {
        db.region = Some(EU_TARGET_REGION.to_string());
    }
    manifest
}
