//! Detector orchestrating the five-stage classification pipeline.
//!
//! Overview
//! - Decodes (or accepts) a raw pixel buffer and normalizes it to 8-bit
//!   grayscale.
//! - Resamples to a fixed working width so processing cost and filter
//!   sensitivity are independent of the input resolution.
//! - Blurs, takes directional derivatives, and reduces them to two mean
//!   energies.
//! - Applies the ratio-threshold classifier to produce the verdict.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the main [`OrientationDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{load_params, OrientationParams};
pub use pipeline::OrientationDetector;
