//! Serializable per-run diagnostics.
use crate::types::{EdgeEnergy, OrientationResult};
use serde::Serialize;

/// Geometry, tuning, and timing of one pipeline run.
#[derive(Clone, Debug, Serialize)]
pub struct ProcessingDiagnostics {
    pub input_width: usize,
    pub input_height: usize,
    pub input_channels: usize,
    pub working_width: usize,
    pub working_height: usize,
    pub kernel_size: usize,
    pub sigma: f32,
    pub decision_factor: f32,
    pub energy: EdgeEnergy,
    pub normalize_ms: f64,
    pub rescale_ms: f64,
    pub analyze_ms: f64,
    pub total_latency_ms: f64,
}

/// Result bundled with its diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct DetailedResult {
    pub result: OrientationResult,
    pub diagnostics: ProcessingDiagnostics,
}
