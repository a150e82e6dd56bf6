//! Rating quantization.
//!
//! [`normalize`] is the single place a raw rating becomes a stored rating:
//! clamp into `[min_rating, number_of_stars]`, then snap to the step grid.
//!
//! Ties round half away from zero (`f64::round`), so with [`StepType::Full`]
//! a raw 2.5 becomes 3.0 and with [`StepType::Half`] a raw 2.25 becomes 2.5.

use serde::{Deserialize, Serialize};

/// Quantization granularity applied to a raw rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    /// Whole stars only
    Full,
    /// Half-star increments
    #[default]
    Half,
    /// No quantization beyond clamping
    Exact,
}

impl StepType {
    /// Distance between adjacent grid values, or `None` when continuous.
    #[must_use]
    pub const fn increment(self) -> Option<f64> {
        match self {
            Self::Full => Some(1.0),
            Self::Half => Some(0.5),
            Self::Exact => None,
        }
    }

    /// Snap a value to the nearest grid point (ties away from zero).
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::Full => value.round(),
            Self::Half => (value * 2.0).round() / 2.0,
            Self::Exact => value,
        }
    }

    /// Smallest grid point that is `>= value`.
    #[must_use]
    pub fn ceil(self, value: f64) -> f64 {
        match self {
            Self::Full => value.ceil(),
            Self::Half => (value * 2.0).ceil() / 2.0,
            Self::Exact => value,
        }
    }
}

/// Clamp and quantize a raw rating.
///
/// The result lies in `[min_rating, number_of_stars]` and on the grid of
/// `step_type`. When `min_rating` itself is off-grid and the nearest grid
/// point falls below it, the result is the first grid point above
/// `min_rating` instead.
///
/// `min_rating > number_of_stars` is a precondition violation; the result is
/// then `number_of_stars` snapped to the grid. A NaN rating clamps to
/// `min_rating`.
#[must_use]
pub fn normalize(rating: f64, min_rating: f64, number_of_stars: u32, step_type: StepType) -> f64 {
    let max = f64::from(number_of_stars);
    // max/min rather than clamp: clamp panics when min > max
    let clamped = rating.max(min_rating).min(max);
    let snapped = step_type.round(clamped);
    if snapped < min_rating {
        step_type.ceil(min_rating).min(max)
    } else {
        snapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // StepType Tests
    // =========================================================================

    #[test]
    fn test_step_type_default_is_half() {
        assert_eq!(StepType::default(), StepType::Half);
    }

    #[test]
    fn test_step_type_increment() {
        assert_eq!(StepType::Full.increment(), Some(1.0));
        assert_eq!(StepType::Half.increment(), Some(0.5));
        assert_eq!(StepType::Exact.increment(), None);
    }

    #[test]
    fn test_step_type_serde_lowercase() {
        let json = serde_json::to_string(&StepType::Exact).unwrap();
        assert_eq!(json, "\"exact\"");
        let parsed: StepType = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(parsed, StepType::Full);
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(StepType::Full.round(2.5), 3.0);
        assert_eq!(StepType::Full.round(3.5), 4.0);
        assert_eq!(StepType::Full.round(-0.5), -1.0);
        assert_eq!(StepType::Half.round(2.25), 2.5);
        assert_eq!(StepType::Half.round(2.75), 3.0);
        assert_eq!(StepType::Exact.round(2.25), 2.25);
    }

    #[test]
    fn test_ceil_grid() {
        assert_eq!(StepType::Full.ceil(0.2), 1.0);
        assert_eq!(StepType::Half.ceil(0.2), 0.5);
        assert_eq!(StepType::Half.ceil(0.5), 0.5);
        assert_eq!(StepType::Exact.ceil(0.2), 0.2);
    }

    // =========================================================================
    // normalize Tests
    // =========================================================================

    #[test]
    fn test_normalize_clamps_above_max() {
        assert_eq!(normalize(7.2, 0.0, 5, StepType::Exact), 5.0);
    }

    #[test]
    fn test_normalize_clamps_below_min() {
        assert_eq!(normalize(-3.0, 1.0, 5, StepType::Exact), 1.0);
    }

    #[test]
    fn test_normalize_full() {
        assert_eq!(normalize(2.4, 0.0, 5, StepType::Full), 2.0);
        assert_eq!(normalize(2.5, 0.0, 5, StepType::Full), 3.0);
        assert_eq!(normalize(2.6, 0.0, 5, StepType::Full), 3.0);
    }

    #[test]
    fn test_normalize_half() {
        assert_eq!(normalize(2.5, 0.0, 5, StepType::Half), 2.5);
        assert_eq!(normalize(2.74, 0.0, 5, StepType::Half), 2.5);
        assert_eq!(normalize(2.75, 0.0, 5, StepType::Half), 3.0);
        assert_eq!(normalize(0.2, 0.0, 5, StepType::Half), 0.0);
    }

    #[test]
    fn test_normalize_exact_passthrough() {
        assert_eq!(normalize(2.978, 0.0, 5, StepType::Exact), 2.978);
    }

    #[test]
    fn test_normalize_off_grid_min_rounds_up() {
        // round(0.2) = 0 would fall below min 0.2
        assert_eq!(normalize(0.0, 0.2, 5, StepType::Full), 1.0);
        assert_eq!(normalize(0.0, 0.2, 5, StepType::Half), 0.5);
        assert_eq!(normalize(0.0, 0.2, 5, StepType::Exact), 0.2);
    }

    #[test]
    fn test_normalize_single_star() {
        assert_eq!(normalize(0.4, 0.0, 1, StepType::Half), 0.5);
        assert_eq!(normalize(9.0, 0.0, 1, StepType::Full), 1.0);
    }

    #[test]
    fn test_normalize_min_above_max_does_not_panic() {
        assert_eq!(normalize(2.0, 7.0, 5, StepType::Full), 5.0);
    }

    #[test]
    fn test_normalize_nan_goes_to_min() {
        assert_eq!(normalize(f64::NAN, 1.0, 5, StepType::Exact), 1.0);
    }
}
