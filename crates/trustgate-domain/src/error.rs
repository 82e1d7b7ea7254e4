/// Faults raised by the engine. Each one aborts the audit call it occurred in.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("violation references policy '{policy_id}' which is not in the active policy set")]
    UnresolvedPolicy { policy_id: String },
}
