//! Core types and traits for the Starling widget framework.
//!
//! This crate provides foundational types used throughout Starling:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex (de)serialization
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - The [`Widget`] and [`Canvas`] traits, plus a [`RecordingCanvas`]
//! - Shared state for bindings: [`ReactiveCell`]

mod binding;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use binding::ReactiveCell;
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, Shadow, StrokeStyle};
pub use event::{Event, MouseButton, PointerId, PointerType, TouchId};
pub use geometry::{Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, LayoutResult, Transform2D, TypeId, Widget};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // COLOR TESTS
    // ==========================================================================

    mod color_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_color_new_clamps_values() {
            let c = Color::new(1.5, -0.5, 0.5, 2.0);
            assert_eq!(c.r, 1.0);
            assert_eq!(c.g, 0.0);
            assert_eq!(c.b, 0.5);
            assert_eq!(c.a, 1.0);
        }

        #[test]
        fn test_color_from_hex() {
            let c = Color::from_hex("#ff0000").unwrap();
            assert_eq!(c.r, 1.0);
            assert_eq!(c.g, 0.0);
            assert_eq!(c.b, 0.0);

            let c2 = Color::from_hex("#00ff00").unwrap();
            assert_eq!(c2.g, 1.0);

            let c3 = Color::from_hex("0000ff").unwrap();
            assert_eq!(c3.b, 1.0);
        }

        #[test]
        fn test_color_from_hex_with_alpha() {
            let c = Color::from_hex("#ff000080").unwrap();
            assert_eq!(c.r, 1.0);
            assert!((c.a - 0.502).abs() < 0.01); // 128/255 ≈ 0.502
        }

        #[test]
        fn test_color_from_hex_invalid() {
            assert!(Color::from_hex("invalid").is_err());
            assert!(Color::from_hex("#gg0000").is_err());
            assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
        }

        #[test]
        fn test_color_to_hex() {
            let c = Color::rgb(1.0, 0.0, 0.0);
            assert_eq!(c.to_hex(), "#ff0000");

            let c2 = Color::new(0.0, 1.0, 0.0, 0.5);
            assert_eq!(c2.to_hex_with_alpha(), "#00ff0080");
        }

        #[test]
        fn test_color_lerp() {
            let black = Color::rgb(0.0, 0.0, 0.0);
            let white = Color::rgb(1.0, 1.0, 1.0);

            let mid = black.lerp(&white, 0.5);
            assert!((mid.r - 0.5).abs() < 0.001);
            assert!((mid.g - 0.5).abs() < 0.001);
            assert!((mid.b - 0.5).abs() < 0.001);
        }

        proptest! {
            #[test]
            fn prop_color_clamps_to_valid_range(r in -1.0f32..2.0, g in -1.0f32..2.0, b in -1.0f32..2.0, a in -1.0f32..2.0) {
                let c = Color::new(r, g, b, a);
                prop_assert!(c.r >= 0.0 && c.r <= 1.0);
                prop_assert!(c.g >= 0.0 && c.g <= 1.0);
                prop_assert!(c.b >= 0.0 && c.b <= 1.0);
                prop_assert!(c.a >= 0.0 && c.a <= 1.0);
            }

            #[test]
            fn prop_hex_roundtrip_within_quantization(r in 0.0f32..1.0, g in 0.0f32..1.0, b in 0.0f32..1.0) {
                let c = Color::rgb(r, g, b);
                let parsed = Color::from_hex(&c.to_hex()).unwrap();
                prop_assert!((parsed.r - c.r).abs() <= 0.5 / 255.0 + 1e-6);
                prop_assert!((parsed.g - c.g).abs() <= 0.5 / 255.0 + 1e-6);
                prop_assert!((parsed.b - c.b).abs() <= 0.5 / 255.0 + 1e-6);
            }

            #[test]
            fn prop_gradient_sample_stays_in_gamut(t in -1.0f32..2.0) {
                let c = Color::sample_gradient(&[Color::RED, Color::GOLD, Color::BLUE], t).unwrap();
                prop_assert!(c.r >= 0.0 && c.r <= 1.0);
                prop_assert!(c.b >= 0.0 && c.b <= 1.0);
            }
        }
    }

    // ==========================================================================
    // GEOMETRY TESTS
    // ==========================================================================

    mod geometry_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_point_new() {
            let p = Point::new(10.0, 20.0);
            assert_eq!(p.x, 10.0);
            assert_eq!(p.y, 20.0);
        }

        #[test]
        fn test_rect_center() {
            let r = Rect::new(0.0, 0.0, 100.0, 50.0);
            assert_eq!(r.center(), Point::new(50.0, 25.0));
        }

        #[test]
        fn test_rect_from_size() {
            let r = Rect::from_size(Size::new(30.0, 40.0));
            assert_eq!(r.origin(), Point::ORIGIN);
            assert_eq!(r.size(), Size::new(30.0, 40.0));
        }

        proptest! {
            #[test]
            fn prop_inset_horizontal_never_negative(w in 0.0f32..500.0, m in 0.0f32..500.0) {
                let r = Rect::new(0.0, 0.0, w, 10.0).inset_horizontal(m);
                prop_assert!(r.width >= 0.0);
                prop_assert_eq!(r.height, 10.0);
            }

            #[test]
            fn prop_center_is_contained(x in -100.0f32..100.0, y in -100.0f32..100.0, w in 0.0f32..100.0, h in 0.0f32..100.0) {
                let r = Rect::new(x, y, w, h);
                prop_assert!(r.contains_point(&r.center()));
            }
        }
    }
}
