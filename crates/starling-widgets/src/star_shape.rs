//! Star polygon generation.

use serde::{Deserialize, Serialize};
use starling_core::{Point, Rect};
use std::f32::consts::PI;

/// Outline of a single star.
///
/// A star with `vertices` points has `2 * vertices` polygon corners,
/// alternating between the outer radius (half the smaller side of its cell)
/// and the inner radius (`outer * weight`). The first corner points straight
/// up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarShape {
    /// Number of star points
    pub vertices: u32,
    /// Inner radius as a fraction of the outer radius
    pub weight: f32,
}

impl Default for StarShape {
    fn default() -> Self {
        Self {
            vertices: 5,
            weight: 0.5,
        }
    }
}

impl StarShape {
    /// Most star points a shape may have.
    pub const MAX_VERTICES: u32 = 64;

    /// Create a star shape.
    #[must_use]
    pub const fn new(vertices: u32, weight: f32) -> Self {
        Self { vertices, weight }
    }

    /// Whether this shape produces a drawable polygon.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (2..=Self::MAX_VERTICES).contains(&self.vertices)
            && self.weight > 0.0
            && self.weight <= 1.0
    }

    /// Polygon corners of the star centred in `cell`.
    ///
    /// Vertex counts above [`Self::MAX_VERTICES`] are capped.
    #[must_use]
    pub fn points(&self, cell: Rect) -> Vec<Point> {
        let center = cell.center();
        let outer = cell.width.min(cell.height) / 2.0;
        let inner = outer * self.weight;
        let vertices = self.vertices.min(Self::MAX_VERTICES);
        let corners = vertices.saturating_mul(2);

        (0..corners)
            .map(|i| {
                let angle = (i as f32).mul_add(PI / vertices as f32, -PI / 2.0);
                let radius = if i % 2 == 0 { outer } else { inner };
                center.polar_offset(radius, angle)
            })
            .collect()
    }
}
