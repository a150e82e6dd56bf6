//! Draw commands for rendering.
//!
//! All rendering reduces to these primitives. A `Clip` or `Group` wraps the
//! command it applies to, so a recorded display list is self-describing.

use crate::widget::Transform2D;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for path rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Drop shadow configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.3),
            offset_x: 0.0,
            offset_y: 2.0,
            blur: 4.0,
        }
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Stroke a path (polyline or closed outline)
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Whether the path is closed
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Fill a polygon
    Polygon {
        /// Polygon vertices
        points: Vec<Point>,
        /// Fill color
        color: Color,
    },

    /// Group of commands with transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },

    /// Clip to bounds
    Clip {
        /// Clip bounds
        bounds: Rect,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a filled polygon.
    #[must_use]
    pub fn polygon(points: Vec<Point>, color: Color) -> Self {
        Self::Polygon { points, color }
    }

    /// Create an open stroked path.
    #[must_use]
    pub fn polyline(points: Vec<Point>, style: StrokeStyle) -> Self {
        Self::Path {
            points,
            closed: false,
            style,
        }
    }

    /// Wrap in a group with transform.
    #[must_use]
    pub fn with_transform(self, transform: Transform2D) -> Self {
        Self::Group {
            children: vec![self],
            transform,
        }
    }

    /// Wrap with clip bounds.
    #[must_use]
    pub fn with_clip(self, bounds: Rect) -> Self {
        Self::Clip {
            bounds,
            child: Box::new(self),
        }
    }

    /// The primitive under any single-child `Clip`/`Group` wrappers.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Clip { child, .. } => child.leaf(),
            Self::Group { children, .. } if children.len() == 1 => children[0].leaf(),
            _ => self,
        }
    }

    /// The outermost clip applied to this command, if any.
    #[must_use]
    pub const fn clip_bounds(&self) -> Option<Rect> {
        match self {
            Self::Clip { bounds, .. } => Some(*bounds),
            _ => None,
        }
    }

    /// The combined transform of all wrapping groups.
    #[must_use]
    pub fn transform(&self) -> Transform2D {
        match self {
            Self::Clip { child, .. } => child.transform(),
            Self::Group {
                children,
                transform,
            } if children.len() == 1 => children[0].transform().then(transform),
            _ => Transform2D::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Style Tests
    // =========================================================================

    #[test]
    fn test_stroke_style_default() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.width, 1.0);
    }

    #[test]
    fn test_shadow_default() {
        let shadow = Shadow::default();
        assert_eq!(shadow.offset_y, 2.0);
        assert!((shadow.color.a - 0.3).abs() < 1e-6);
    }

    // =========================================================================
    // DrawCommand Tests
    // =========================================================================

    #[test]
    fn test_leaf_unwraps_clip_and_group() {
        let poly = DrawCommand::polygon(vec![Point::ORIGIN], Color::RED);
        let wrapped = poly
            .clone()
            .with_transform(Transform2D::translate(1.0, 1.0))
            .with_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(wrapped.leaf(), &poly);
        assert_eq!(wrapped.clip_bounds(), Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
        assert_eq!(poly.clip_bounds(), None);
    }

    #[test]
    fn test_transform_accumulates_nested_groups() {
        let cmd = DrawCommand::polygon(vec![], Color::RED)
            .with_transform(Transform2D::translate(1.0, 0.0))
            .with_transform(Transform2D::translate(0.0, 2.0));
        assert_eq!(cmd.transform().apply(Point::ORIGIN), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_leaf_stops_at_multi_child_group() {
        let group = DrawCommand::Group {
            children: vec![
                DrawCommand::polygon(vec![], Color::RED),
                DrawCommand::polygon(vec![], Color::BLUE),
            ],
            transform: Transform2D::IDENTITY,
        };
        assert_eq!(group.leaf(), &group);
        assert_eq!(group.transform(), Transform2D::IDENTITY);
    }

    #[test]
    fn test_polyline_is_open() {
        let cmd = DrawCommand::polyline(vec![Point::ORIGIN], StrokeStyle::default());
        assert!(matches!(cmd, DrawCommand::Path { closed: false, .. }));
    }
}
