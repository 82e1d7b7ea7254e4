#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Passed,
    Corrected,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableViolation {
    pub severity: RenderableSeverity,
    pub policy_id: String,
    pub policy_name: String,
    pub framework: String,
    pub detected_issue: String,
    pub auto_correction: Option<String>,
}

/// Flattened view of a stage result. `score` is absent when the stage produced no report.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub stage_name: String,
    pub status: RenderableStatus,
    pub score: Option<f64>,
    pub frameworks: Vec<String>,
    pub violations: Vec<RenderableViolation>,
    pub violations_corrected: usize,
    pub remaining: Vec<String>,
    pub error: Option<String>,
}
