//! Built-in policy table.

use crate::policy::Policy;

mod audit_logging;
mod encryption_at_rest;
mod encryption_in_transit;
mod eu_residency;
mod iam_policies;
mod no_public_exposure;
mod private_endpoints;
mod utils;
mod vpc_isolation;


/// Declaration order is normative.
pub(crate) static ALL: [Policy; 8] = [
    vpc_isolation::POLICY,
    encryption_at_rest::POLICY,
    audit_logging::POLICY,
    encryption_in_transit::POLICY,
    private_endpoints::POLICY,
    no_public_exposure::POLICY,
    iam_policies::POLICY,
    eu_residency::POLICY,
];
