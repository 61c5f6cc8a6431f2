//! Parameter types configuring the pipeline stages.
//!
//! Defaults match the reference tuning for letter-sized pages scanned at
//! roughly 200 dpi with 9–12 pt text. For tuning, start with the decision
//! factor, then the blur.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Pipeline-wide parameters controlling scale, blur, and the decision
/// threshold.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OrientationParams {
    /// Fixed working width in pixels. All edge analysis runs at this
    /// scale, decoupling processing cost from the input resolution.
    pub target_width: usize,
    /// Gaussian kernel side length; odd, at least 3. Larger kernels
    /// emphasise line-scale over glyph-scale structure.
    pub kernel_size: usize,
    /// Standard deviation of the blur kernel.
    pub sigma: f32,
    /// Multiplicative margin one directional energy must exceed the other
    /// by to yield a decisive verdict.
    pub decision_factor: f32,
}

impl Default for OrientationParams {
    fn default() -> Self {
        Self {
            target_width: 512,
            kernel_size: 7,
            sigma: 2.3,
            decision_factor: 1.4,
        }
    }
}

impl OrientationParams {
    /// Clamps the kernel size to a valid odd value, logging adjustments.
    pub fn validated(mut self) -> Self {
        if self.kernel_size < 3 {
            warn!(
                "kernel_size {} below the 3-tap minimum, clamping to 3",
                self.kernel_size
            );
            self.kernel_size = 3;
        } else if self.kernel_size % 2 == 0 {
            warn!(
                "kernel_size {} is even, bumping to {}",
                self.kernel_size,
                self.kernel_size + 1
            );
            self.kernel_size += 1;
        }
        if !(self.sigma > 0.0) {
            let fallback = Self::default().sigma;
            warn!("sigma {} is not positive, using {}", self.sigma, fallback);
            self.sigma = fallback;
        }
        self
    }
}

/// Load parameters from a JSON file; absent fields keep their defaults.
pub fn load_params(path: &Path) -> Result<OrientationParams, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read params {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse params {}: {e}", path.display()))
}
