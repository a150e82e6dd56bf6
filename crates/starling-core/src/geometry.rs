//! Geometric primitives: Point, Size, Rect.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Point at polar offset from this one (angle in radians, 0 = +x axis).
    #[must_use]
    pub fn polar_offset(&self, radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(radius.mul_add(cos, self.x), radius.mul_add(sin, self.y))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from size at origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Calculate intersection with another rectangle.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);

        if right > x && bottom > y {
            Some(Self::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Inset the left and right edges by `amount`, keeping the vertical extent.
    ///
    /// Width never goes below zero.
    #[must_use]
    pub fn inset_horizontal(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y,
            2.0f32.mul_add(-amount, self.width).max(0.0),
            self.height,
        )
    }

    /// Create a new rectangle with the given width, keeping the origin.
    #[must_use]
    pub fn with_width(&self, width: f32) -> Self {
        Self::new(self.x, self.y, width, self.height)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_add_sub() {
        let p = Point::new(3.0, 4.0) + Point::new(1.0, 1.0);
        assert_eq!(p, Point::new(4.0, 5.0));
        assert_eq!(p - Point::new(4.0, 5.0), Point::ORIGIN);
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::ORIGIN.distance(&Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_point_polar_offset_up() {
        let p = Point::new(10.0, 10.0).polar_offset(5.0, -std::f32::consts::FRAC_PI_2);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_size_default() {
        assert_eq!(Size::default(), Size::ZERO);
    }

    #[test]
    fn test_rect_default() {
        let r = Rect::default();
        assert_eq!(r.x, 0.0);
        assert_eq!(r.size(), Size::ZERO);
    }

    #[test]
    fn test_rect_contains_point_inclusive() {
        let r = Rect::new(10.0, 10.0, 100.0, 20.0);
        assert!(r.contains_point(&Point::new(10.0, 10.0)));
        assert!(r.contains_point(&Point::new(110.0, 30.0)));
        assert!(!r.contains_point(&Point::new(110.1, 30.0)));
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(a.intersection(&Rect::new(20.0, 0.0, 1.0, 1.0)), None);
    }

    #[test]
    fn test_rect_inset_horizontal() {
        let r = Rect::new(10.0, 5.0, 100.0, 20.0).inset_horizontal(8.0);
        assert_eq!(r, Rect::new(18.0, 5.0, 84.0, 20.0));
    }

    #[test]
    fn test_rect_inset_horizontal_saturates() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0).inset_horizontal(8.0);
        assert_eq!(r.width, 0.0);
    }

    #[test]
    fn test_rect_right_and_with_width() {
        let r = Rect::new(10.0, 0.0, 50.0, 5.0);
        assert_eq!(r.right(), 60.0);
        assert_eq!(r.with_width(5.0).right(), 15.0);
    }
}
