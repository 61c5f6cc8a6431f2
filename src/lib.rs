#![doc = include_str!("../README.md")]

pub mod classify;
pub mod detector;
pub mod diagnostics;
pub mod energy;
pub mod grayscale;
pub mod image;
pub mod report;
pub mod rescale;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{OrientationDetector, OrientationParams};
pub use crate::types::{
    EdgeEnergy, OrientationError, OrientationResult, TextOrientation, Verdict,
};

// Per-stage diagnostics returned by the detector.
pub use crate::diagnostics::{DetailedResult, ProcessingDiagnostics};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use text_orientation::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = PixelBuffer::new_gray(w, h, vec![255u8; w * h]);
///
/// let detector = OrientationDetector::new(OrientationParams::default());
/// let result = detector.process(gray).unwrap();
/// println!("{} confidence={:.2}", result.orientation.name(), result.confidence);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::PixelBuffer;
    pub use crate::{OrientationDetector, OrientationParams, OrientationResult, TextOrientation};
}
