//! Star row geometry: pointer offset to rating, and rating to fill width.
//!
//! Offsets are measured from the left edge of the control, margin included.
//! The star field starts at `margin` and is `width - 2 * margin` wide; it
//! holds `number_of_stars` equal stars separated by `spacing`. A hit inside
//! the gap after star `i` selects star `i + 1` in full.
//!
//! [`StarLayout::rating_at`] and [`StarLayout::fill_width`] are inverses: the
//! offset `margin + fill_width(r)` maps back to `r` for any normalized
//! `r >= 0`.

use crate::step::{normalize, StepType};

/// Resolved geometry of a star row for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarLayout {
    width: f64,
    margin: f64,
    spacing: f64,
    number_of_stars: u32,
    star_width: f64,
}

impl StarLayout {
    /// Resolve the per-star width.
    ///
    /// Returns `None` for degenerate layouts: the star width comes out
    /// non-positive (control too narrow for the stars, spacing and margins),
    /// or non-finite (zero stars divides by zero).
    #[must_use]
    pub fn new(width: f64, margin: f64, spacing: f64, number_of_stars: u32) -> Option<Self> {
        let effective = 2.0f64.mul_add(-margin, width);
        let gaps = f64::from(number_of_stars.saturating_sub(1));
        let star_width = spacing.mul_add(-gaps, effective) / f64::from(number_of_stars);

        if star_width.is_finite() && star_width > 0.0 {
            Some(Self {
                width,
                margin,
                spacing,
                number_of_stars,
                star_width,
            })
        } else {
            None
        }
    }

    /// Total control width, margins included.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Horizontal inset on each side.
    #[must_use]
    pub const fn margin(&self) -> f64 {
        self.margin
    }

    /// Gap between adjacent stars.
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Number of stars in the row.
    #[must_use]
    pub const fn number_of_stars(&self) -> u32 {
        self.number_of_stars
    }

    /// Width of a single star.
    #[must_use]
    pub const fn star_width(&self) -> f64 {
        self.star_width
    }

    /// Width of the star field (control width minus both margins).
    #[must_use]
    pub fn effective_width(&self) -> f64 {
        2.0f64.mul_add(-self.margin, self.width)
    }

    /// Distance from the start of one star to the start of the next.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.star_width + self.spacing
    }

    /// Left edge of star `index`, measured from the control's left edge.
    #[must_use]
    pub fn star_start(&self, index: u32) -> f64 {
        f64::from(index).mul_add(self.stride(), self.margin)
    }

    /// Raw (unquantized) rating for a pointer offset.
    ///
    /// Offsets at or left of the star field give `min_rating`; offsets at or
    /// right of its end give `number_of_stars`.
    #[must_use]
    pub fn raw_rating_at(&self, x: f64, min_rating: f64) -> f64 {
        let offset = x - self.margin;
        if offset <= 0.0 {
            return min_rating;
        }
        if offset >= self.effective_width() {
            return f64::from(self.number_of_stars);
        }

        let stride = self.stride();
        let index = (offset / stride).floor();
        let within = index.mul_add(-stride, offset);

        if within > self.star_width {
            // Gap belongs to the next star
            index + 1.0
        } else {
            index + within / self.star_width
        }
    }

    /// Normalized rating for a pointer offset.
    #[must_use]
    pub fn rating_at(&self, x: f64, min_rating: f64, step_type: StepType) -> f64 {
        normalize(
            self.raw_rating_at(x, min_rating),
            min_rating,
            self.number_of_stars,
            step_type,
        )
    }

    /// Width of the filled region for a rating, measured from the start of
    /// the star field.
    ///
    /// Whole stars contribute a full stride (star plus trailing gap), the
    /// fractional part a fraction of one star. Negative ratings fill nothing.
    #[must_use]
    pub fn fill_width(&self, rating: f64) -> f64 {
        let full_stars = rating.floor();
        let partial = rating - full_stars;
        partial
            .mul_add(self.star_width, full_stars * self.stride())
            .max(0.0)
    }
}
