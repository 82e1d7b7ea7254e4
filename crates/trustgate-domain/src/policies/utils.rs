use crate::model::Manifest;
use trustgate_types::Sensitivity;

pub const HEALTH_OR_PERSONAL: &[Sensitivity] = &[Sensitivity::Phi, Sensitivity::Pii];
pub const HEALTH_OR_PAYMENT: &[Sensitivity] = &[Sensitivity::Phi, Sensitivity::Pci];
pub const REGULATED: &[Sensitivity] = &[Sensitivity::Phi, Sensitivity::Pii, Sensitivity::Pci];

/// VPC on, subnets isolated, private endpoints only.
pub fn isolate_network(mut manifest: Manifest) -> Manifest {
    let net = manifest.networking_mut();
    net.vpc_enabled = true;
    net.subnet_isolation = true;
    net.private_endpoints = true;
    manifest
}
