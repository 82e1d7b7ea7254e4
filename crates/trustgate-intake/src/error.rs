use trustgate_types::Sensitivity;

/// Malformed upstream payloads. Each one fails the audit call that received it.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("invalid {payload} payload")]
    InvalidJson {
        payload: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "unrecognized data sensitivity '{value}' (expected one of: {})",
        known_sensitivities()
    )]
    UnknownSensitivity { value: String },
}

fn known_sensitivities() -> String {
    [
        Sensitivity::Public,
        Sensitivity::Pii,
        Sensitivity::Phi,
        Sensitivity::Pci,
    ]
    .iter()
    .map(|s| s.as_str())
    .collect::<Vec<_>>()
    .join(", ")
}
