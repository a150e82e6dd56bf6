//! Rating configuration.
//!
//! [`RatingConfig`] holds everything a [`StarRating`](crate::StarRating)
//! needs besides its current value: the rating domain (star count, minimum,
//! step), the row spacing, and the visual style. Only the domain fields and
//! `spacing` affect the rating math.
//!
//! Configurations load from YAML or JSON. Missing fields take their defaults
//! and the loaded value is validated:
//!
//! ```
//! use starling_widgets::{RatingConfig, StepType};
//!
//! let config = RatingConfig::from_yaml(
//!     "number_of_stars: 10\nstep_type: full\nfill_colors: ['#ff0000', '#ffd700']\n",
//! )
//! .unwrap();
//! assert_eq!(config.number_of_stars, 10);
//! assert_eq!(config.step_type, StepType::Full);
//! assert_eq!(config.spacing, 4.0);
//! ```

use crate::error::ConfigError;
use crate::star_shape::StarShape;
use crate::step::{normalize, StepType};
use serde::{Deserialize, Serialize};
use starling_core::{Color, Shadow};

/// Domain and style of a star-rating control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Number of stars; also the maximum rating
    pub number_of_stars: u32,
    /// Lowest selectable rating
    pub min_rating: f64,
    /// Quantization of selected ratings
    pub step_type: StepType,
    /// Horizontal gap between stars
    pub spacing: f64,
    /// Colour of the unfilled stars
    pub empty_color: Color,
    /// Gradient stops for the filled stars, left to right
    pub fill_colors: Vec<Color>,
    /// Outline colour
    pub border_color: Color,
    /// Outline width (0 disables the outline)
    pub border_width: f32,
    /// Drop shadow under each star
    pub shadow: Option<Shadow>,
    /// Star outline geometry
    pub star_shape: StarShape,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            number_of_stars: 5,
            min_rating: 0.0,
            step_type: StepType::Half,
            spacing: 4.0,
            empty_color: Color::rgb(0.85, 0.85, 0.85),
            fill_colors: vec![Color::GOLD],
            border_color: Color::rgb(0.72, 0.53, 0.04),
            border_width: 1.0,
            shadow: None,
            star_shape: StarShape::default(),
        }
    }
}

impl RatingConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of stars.
    #[must_use]
    pub const fn number_of_stars(mut self, count: u32) -> Self {
        self.number_of_stars = count;
        self
    }

    /// Set the minimum rating.
    #[must_use]
    pub const fn min_rating(mut self, min: f64) -> Self {
        self.min_rating = min;
        self
    }

    /// Set the step type.
    #[must_use]
    pub const fn step_type(mut self, step_type: StepType) -> Self {
        self.step_type = step_type;
        self
    }

    /// Set the spacing between stars.
    #[must_use]
    pub const fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the empty star colour.
    #[must_use]
    pub const fn empty_color(mut self, color: Color) -> Self {
        self.empty_color = color;
        self
    }

    /// Set a single fill colour.
    #[must_use]
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_colors = vec![color];
        self
    }

    /// Set the fill gradient stops.
    #[must_use]
    pub fn fill_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.fill_colors = colors.into();
        self
    }

    /// Set the outline colour.
    #[must_use]
    pub const fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set the outline width.
    #[must_use]
    pub const fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    /// Set the drop shadow.
    #[must_use]
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Set the star shape.
    #[must_use]
    pub const fn star_shape(mut self, shape: StarShape) -> Self {
        self.star_shape = shape;
        self
    }

    /// Highest selectable rating.
    #[must_use]
    pub fn max_rating(&self) -> f64 {
        f64::from(self.number_of_stars)
    }

    /// Clamp and quantize a rating into this configuration's domain.
    #[must_use]
    pub fn normalize(&self, rating: f64) -> f64 {
        normalize(
            rating,
            self.min_rating,
            self.number_of_stars,
            self.step_type,
        )
    }

    /// Fill colour of star `index`, sampled evenly across the gradient.
    #[must_use]
    pub fn fill_color_for(&self, index: u32) -> Color {
        let t = if self.number_of_stars > 1 {
            index as f32 / (self.number_of_stars - 1) as f32
        } else {
            0.0
        };
        Color::sample_gradient(&self.fill_colors, t).unwrap_or(Color::TRANSPARENT)
    }

    /// Check the domain preconditions and style invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_stars == 0 {
            return Err(ConfigError::NoStars);
        }
        if !self.min_rating.is_finite() {
            return Err(ConfigError::NonFinite("min_rating"));
        }
        if !self.spacing.is_finite() {
            return Err(ConfigError::NonFinite("spacing"));
        }
        if !self.border_width.is_finite() {
            return Err(ConfigError::NonFinite("border_width"));
        }
        if self.min_rating > self.max_rating() {
            return Err(ConfigError::MinAboveMax {
                min: self.min_rating,
                max: self.max_rating(),
            });
        }
        if self.spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing(self.spacing));
        }
        if self.fill_colors.is_empty() {
            return Err(ConfigError::EmptyGradient);
        }
        if !self.star_shape.is_valid() {
            return Err(ConfigError::InvalidShape(format!(
                "{} vertices with weight {}",
                self.star_shape.vertices, self.star_shape.weight
            )));
        }
        Ok(())
    }

    /// Parse and validate a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validated()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if let Err(err) = self.validate() {
            tracing::warn!(error = %err, "rejected rating configuration");
            return Err(err);
        }
        Ok(self)
    }
}
