//! Error types for rating configuration.

use thiserror::Error;

/// Errors raised while loading or validating a [`RatingConfig`](crate::RatingConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML could not be parsed or produced.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `number_of_stars` was zero.
    #[error("number_of_stars must be at least 1")]
    NoStars,

    /// `min_rating` exceeds the maximum rating.
    #[error("min_rating {min} exceeds number_of_stars {max}")]
    MinAboveMax {
        /// Configured minimum
        min: f64,
        /// Maximum rating (star count)
        max: f64,
    },

    /// `spacing` was negative.
    #[error("spacing must not be negative, got {0}")]
    NegativeSpacing(f64),

    /// A numeric field was NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),

    /// `fill_colors` had no stops.
    #[error("fill_colors needs at least one colour")]
    EmptyGradient,

    /// `star_shape` cannot produce a polygon.
    #[error("invalid star shape: {0}")]
    InvalidShape(String),
}
