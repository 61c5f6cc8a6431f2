use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Classification outcomes.
///
/// The integer ids are stable and appear verbatim in console and XML
/// reports; internal logic never depends on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextOrientation {
    Error,
    Blank,
    Horizontal,
    Vertical,
    Indeterminate,
}

impl TextOrientation {
    /// Stable report id: -1 ERROR, 0 BLANK, 1 HORIZONTAL, 2 VERTICAL,
    /// 3 INDETERMINATE.
    pub fn id(self) -> i32 {
        match self {
            TextOrientation::Error => -1,
            TextOrientation::Blank => 0,
            TextOrientation::Horizontal => 1,
            TextOrientation::Vertical => 2,
            TextOrientation::Indeterminate => 3,
        }
    }

    /// Uppercase name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            TextOrientation::Error => "ERROR",
            TextOrientation::Blank => "BLANK",
            TextOrientation::Horizontal => "HORIZONTAL",
            TextOrientation::Vertical => "VERTICAL",
            TextOrientation::Indeterminate => "INDETERMINATE",
        }
    }
}

/// Mean intensities of the two directional derivative images.
///
/// `mean_horizontal` measures horizontal-edge strength (derivative in y),
/// `mean_vertical` vertical-edge strength (derivative in x).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct EdgeEnergy {
    pub mean_horizontal: f32,
    pub mean_vertical: f32,
}

/// Orientation verdict with its confidence ratio.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Verdict {
    pub orientation: TextOrientation,
    /// Ratio by which the winning direction dominated; exactly 1 for BLANK
    /// and the zero-energy INDETERMINATE fallback, 0 for ERROR.
    pub confidence: f32,
}

/// Final pipeline output for one image.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct OrientationResult {
    pub orientation: TextOrientation,
    pub confidence: f32,
    pub energy: EdgeEnergy,
    pub latency_ms: f64,
}

impl OrientationResult {
    /// The result reported when the pipeline failed before classification.
    pub fn error() -> Self {
        Self {
            orientation: TextOrientation::Error,
            confidence: 0.0,
            energy: EdgeEnergy {
                mean_horizontal: 0.0,
                mean_vertical: 0.0,
            },
            latency_ms: 0.0,
        }
    }
}

/// Fatal pipeline conditions. None of these are retried; the caller maps
/// them to an ERROR verdict and still emits a well-formed report.
#[derive(Debug, Error)]
pub enum OrientationError {
    /// The decoder could not produce pixels from the input path.
    #[error("failed to load image {}: {reason}", .path.display())]
    ImageLoad { path: PathBuf, reason: String },

    /// Pixel layout the pipeline cannot interpret.
    #[error("unsupported image layout: {width}x{height}, {channels} channel(s) (expected 1 or 3)")]
    UnsupportedFormat {
        width: usize,
        height: usize,
        channels: usize,
    },

    /// The working geometry collapsed to zero pixels.
    #[error("degenerate working geometry: {width}x{height}")]
    DegenerateGeometry { width: usize, height: usize },

    /// A report sink could not be written.
    #[error("failed to write report {}: {reason}", .path.display())]
    Report { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::TextOrientation;

    #[test]
    fn report_ids_are_stable() {
        assert_eq!(TextOrientation::Error.id(), -1);
        assert_eq!(TextOrientation::Blank.id(), 0);
        assert_eq!(TextOrientation::Horizontal.id(), 1);
        assert_eq!(TextOrientation::Vertical.id(), 2);
        assert_eq!(TextOrientation::Indeterminate.id(), 3);
    }

    #[test]
    fn names_match_report_vocabulary() {
        assert_eq!(TextOrientation::Horizontal.name(), "HORIZONTAL");
        assert_eq!(TextOrientation::Indeterminate.name(), "INDETERMINATE");
    }
}
