//! Pipeline driving the orientation classification end-to-end.
//!
//! The [`OrientationDetector`] exposes a simple API: feed an image and get
//! a verdict with its confidence and the underlying energy pair. Stages
//! run strictly in sequence over immutable buffers; any fatal condition
//! short-circuits with a typed error for the caller to map to an ERROR
//! report.
//!
//! Typical usage:
//! ```no_run
//! use text_orientation::{OrientationDetector, OrientationParams};
//!
//! # fn example() -> Result<(), text_orientation::OrientationError> {
//! let detector = OrientationDetector::new(OrientationParams::default());
//! let result = detector.process_file("page.tiff".as_ref())?;
//! println!("{} {:.2}", result.orientation.name(), result.confidence);
//! # Ok(())
//! # }
//! ```
use super::params::OrientationParams;
use crate::classify::classify;
use crate::diagnostics::{DetailedResult, ProcessingDiagnostics};
use crate::energy;
use crate::grayscale;
use crate::image::io::load_pixel_buffer;
use crate::image::PixelBuffer;
use crate::rescale::rescale;
use crate::types::{OrientationError, OrientationResult};
use log::debug;
use std::path::Path;
use std::time::Instant;

/// Orientation detector orchestrating normalization, rescaling, edge
/// analysis, and classification.
pub struct OrientationDetector {
    params: OrientationParams,
}

impl OrientationDetector {
    /// Create a detector with the supplied parameters (validated first).
    pub fn new(params: OrientationParams) -> Self {
        Self {
            params: params.validated(),
        }
    }

    pub fn params(&self) -> &OrientationParams {
        &self.params
    }

    /// Decode an image file and classify it.
    pub fn process_file(&self, path: &Path) -> Result<OrientationResult, OrientationError> {
        let raw = load_pixel_buffer(path)?;
        self.process(raw)
    }

    /// Classify a decoded pixel buffer, returning a compact result.
    pub fn process(&self, raw: PixelBuffer) -> Result<OrientationResult, OrientationError> {
        Ok(self.process_with_diagnostics(raw)?.result)
    }

    /// Classify a decoded pixel buffer and report per-stage diagnostics.
    pub fn process_with_diagnostics(
        &self,
        raw: PixelBuffer,
    ) -> Result<DetailedResult, OrientationError> {
        let start = Instant::now();
        let (input_width, input_height, input_channels) =
            (raw.width(), raw.height(), raw.channels());
        debug!(
            "OrientationDetector::process start w={} h={} channels={}",
            input_width, input_height, input_channels
        );

        let stage = Instant::now();
        let gray = grayscale::normalize(raw)?;
        let normalize_ms = elapsed_ms(stage);

        let stage = Instant::now();
        let small = rescale(&gray, self.params.target_width)?;
        let rescale_ms = elapsed_ms(stage);
        debug!(
            "rescaled {}x{} -> {}x{}",
            gray.width(),
            gray.height(),
            small.width(),
            small.height()
        );

        let stage = Instant::now();
        let edge_energy = energy::analyze(&small, self.params.kernel_size, self.params.sigma);
        let analyze_ms = elapsed_ms(stage);
        debug!(
            "edge energy mean_h={:.3} mean_v={:.3}",
            edge_energy.mean_horizontal, edge_energy.mean_vertical
        );

        let verdict = classify(edge_energy, self.params.decision_factor);
        let total_latency_ms = elapsed_ms(start);
        debug!(
            "verdict {} confidence={:.3} latency_ms={:.3}",
            verdict.orientation.name(),
            verdict.confidence,
            total_latency_ms
        );

        Ok(DetailedResult {
            result: OrientationResult {
                orientation: verdict.orientation,
                confidence: verdict.confidence,
                energy: edge_energy,
                latency_ms: total_latency_ms,
            },
            diagnostics: ProcessingDiagnostics {
                input_width,
                input_height,
                input_channels,
                working_width: small.width(),
                working_height: small.height(),
                kernel_size: self.params.kernel_size,
                sigma: self.params.sigma,
                decision_factor: self.params.decision_factor,
                energy: edge_energy,
                normalize_ms,
                rescale_ms,
                analyze_ms,
                total_latency_ms,
            },
        })
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
