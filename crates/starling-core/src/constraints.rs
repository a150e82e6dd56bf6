//! Box constraints passed from parent to child during measure.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Allowed size range for a widget.
///
/// A widget reports its preferred size through [`Constraints::constrain`],
/// so a control that would like to be 136x24 still fits a 100px column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Constraints from explicit bounds.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Anything from zero up to `size`.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// No upper bound in either axis.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Fit `size` into these bounds.
    ///
    /// The maximum wins when the bounds are inverted, and a NaN dimension
    /// resolves to the minimum.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            fit(size.width, self.min_width, self.max_width),
            fit(size.height, self.min_height, self.max_height),
        )
    }
}

fn fit(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let c = Constraints::default();
        assert_eq!(c, Constraints::unbounded());
        assert_eq!(c.constrain(Size::new(1e6, 24.0)), Size::new(1e6, 24.0));
    }

    #[test]
    fn test_min_bounds_grow_small_row() {
        let c = Constraints::new(200.0, 400.0, 40.0, 40.0);
        assert_eq!(c.constrain(Size::new(136.0, 24.0)), Size::new(200.0, 40.0));
    }

    #[test]
    fn test_loose_shrinks_wide_row() {
        let c = Constraints::loose(Size::new(100.0, 50.0));
        assert_eq!(c.constrain(Size::new(136.0, 24.0)), Size::new(100.0, 24.0));
    }

    #[test]
    fn test_constrain_within_range() {
        let c = Constraints::new(10.0, 100.0, 20.0, 80.0);
        assert_eq!(c.constrain(Size::new(5.0, 5.0)), Size::new(10.0, 20.0));
        assert_eq!(c.constrain(Size::new(200.0, 200.0)), Size::new(100.0, 80.0));
    }

    #[test]
    fn test_constrain_inverted_bounds_prefers_max() {
        let c = Constraints::new(50.0, 10.0, 0.0, 10.0);
        assert_eq!(c.constrain(Size::new(30.0, 5.0)), Size::new(10.0, 5.0));
    }

    #[test]
    fn test_constrain_nan_uses_min() {
        let c = Constraints::new(4.0, 100.0, 2.0, 100.0);
        assert_eq!(c.constrain(Size::new(f32::NAN, f32::NAN)), Size::new(4.0, 2.0));
    }
}
