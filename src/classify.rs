//! Ratio-threshold classification of the two directional energies.
use crate::types::{EdgeEnergy, TextOrientation, Verdict};

/// Both means under one grayscale level reads as an unmarked page.
const BLANK_ENERGY_CEILING: f32 = 1.0;

/// Classify an edge-energy pair against a decision factor.
///
/// `decision_factor` is the multiplicative margin one directional energy
/// must exceed the other by for a decisive verdict; useful values sit
/// around 1.3–1.6. The function is total and deterministic: identical
/// inputs always produce the identical verdict.
pub fn classify(energy: EdgeEnergy, decision_factor: f32) -> Verdict {
    let EdgeEnergy {
        mean_horizontal: mean_h,
        mean_vertical: mean_v,
    } = energy;

    if mean_h < BLANK_ENERGY_CEILING && mean_v < BLANK_ENERGY_CEILING {
        return Verdict {
            orientation: TextOrientation::Blank,
            confidence: 1.0,
        };
    }

    if mean_h > 0.0 && mean_v > 0.0 {
        let hv_ratio = mean_h / mean_v;
        let vh_ratio = mean_v / mean_h;
        if hv_ratio > decision_factor {
            Verdict {
                orientation: TextOrientation::Horizontal,
                confidence: hv_ratio,
            }
        } else if vh_ratio > decision_factor {
            Verdict {
                orientation: TextOrientation::Vertical,
                confidence: vh_ratio,
            }
        } else {
            Verdict {
                orientation: TextOrientation::Indeterminate,
                confidence: hv_ratio.max(vh_ratio),
            }
        }
    } else {
        // One mean is exactly zero while the other cleared the blank
        // ceiling; no ratio is defined.
        Verdict {
            orientation: TextOrientation::Indeterminate,
            confidence: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::types::{EdgeEnergy, TextOrientation};

    fn energy(mean_horizontal: f32, mean_vertical: f32) -> EdgeEnergy {
        EdgeEnergy {
            mean_horizontal,
            mean_vertical,
        }
    }

    #[test]
    fn both_means_below_one_level_is_blank() {
        let verdict = classify(energy(0.5, 0.5), 1.4);
        assert_eq!(verdict.orientation, TextOrientation::Blank);
        assert_eq!(verdict.confidence, 1.0);
    }

    #[test]
    fn dominant_horizontal_energy_wins() {
        let verdict = classify(energy(10.0, 5.0), 1.4);
        assert_eq!(verdict.orientation, TextOrientation::Horizontal);
        assert_eq!(verdict.confidence, 2.0);
    }

    #[test]
    fn dominant_vertical_energy_wins() {
        let verdict = classify(energy(5.0, 10.0), 1.4);
        assert_eq!(verdict.orientation, TextOrientation::Vertical);
        assert_eq!(verdict.confidence, 2.0);
    }

    #[test]
    fn near_equal_energies_are_indeterminate() {
        let verdict = classify(energy(5.0, 5.5), 1.4);
        assert_eq!(verdict.orientation, TextOrientation::Indeterminate);
        assert!((verdict.confidence - 1.1).abs() < 1e-6);
    }

    #[test]
    fn zero_energy_on_one_axis_falls_back_to_indeterminate() {
        let verdict = classify(energy(0.0, 3.0), 1.4);
        assert_eq!(verdict.orientation, TextOrientation::Indeterminate);
        assert_eq!(verdict.confidence, 1.0);
    }

    #[test]
    fn classification_is_deterministic() {
        let first = classify(energy(7.3, 4.1), 1.4);
        let second = classify(energy(7.3, 4.1), 1.4);
        assert_eq!(first.orientation, second.orientation);
        assert_eq!(first.confidence, second.confidence);
    }

    #[test]
    fn ratio_exactly_at_the_factor_is_not_decisive() {
        let verdict = classify(energy(7.0, 5.0), 1.4);
        assert_eq!(verdict.orientation, TextOrientation::Indeterminate);
        assert!((verdict.confidence - 1.4).abs() < 1e-6);
    }
}
