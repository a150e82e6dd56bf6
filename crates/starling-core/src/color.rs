//! Color representation with hex parsing and interpolation.
//!
//! Colors serialize as hex strings (`"#rrggbb"`, or `"#rrggbbaa"` when not
//! fully opaque) so they read naturally in YAML and JSON configuration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from RGBA values.
    #[must_use]
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(r, g, b, a)
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Convert to hex string with alpha.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8
        )
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            (other.r - self.r).mul_add(t, self.r),
            (other.g - self.g).mul_add(t, self.g),
            (other.b - self.b).mul_add(t, self.b),
            (other.a - self.a).mul_add(t, self.a),
        )
    }

    /// Sample a multi-stop gradient at `t` in [0.0, 1.0].
    ///
    /// Stops are evenly spaced. Returns `None` for an empty stop list.
    #[must_use]
    pub fn sample_gradient(stops: &[Self], t: f32) -> Option<Self> {
        match stops {
            [] => None,
            [only] => Some(*only),
            _ => {
                let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
                let index = (scaled.floor() as usize).min(stops.len() - 2);
                Some(stops[index].lerp(&stops[index + 1], scaled - index as f32))
            }
        }
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    /// Red color
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// Green color
    pub const GREEN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    /// Blue color
    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
    /// Gold (#ffd700), the usual filled-star color
    pub const GOLD: Self = Self {
        r: 1.0,
        g: 0.843_137_26,
        b: 0.0,
        a: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.a < 1.0 {
            serializer.serialize_str(&self.to_hex_with_alpha())
        } else {
            serializer.serialize_str(&self.to_hex())
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6 or 8)"),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_gradient_empty() {
        assert_eq!(Color::sample_gradient(&[], 0.5), None);
    }

    #[test]
    fn test_sample_gradient_single_stop() {
        assert_eq!(Color::sample_gradient(&[Color::RED], 0.7), Some(Color::RED));
    }

    #[test]
    fn test_sample_gradient_endpoints() {
        let stops = [Color::RED, Color::GREEN, Color::BLUE];
        assert_eq!(Color::sample_gradient(&stops, 0.0), Some(Color::RED));
        assert_eq!(Color::sample_gradient(&stops, 1.0), Some(Color::BLUE));
        assert_eq!(Color::sample_gradient(&stops, 0.5), Some(Color::GREEN));
    }

    #[test]
    fn test_sample_gradient_between_stops() {
        let c = Color::sample_gradient(&[Color::BLACK, Color::WHITE], 0.25).unwrap();
        assert!((c.r - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_gold_matches_hex() {
        let parsed = Color::from_hex("#ffd700").unwrap();
        assert!((parsed.g - Color::GOLD.g).abs() < 1e-6);
        assert_eq!(Color::GOLD.to_hex(), "#ffd700");
    }

    #[test]
    fn test_from_hex_rejects_multibyte() {
        assert_eq!(Color::from_hex("ééé"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_serde_opaque_as_short_hex() {
        let json = serde_json::to_string(&Color::RED).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn test_serde_translucent_keeps_alpha() {
        let json = serde_json::to_string(&Color::rgba(0.0, 0.0, 0.0, 0.5)).unwrap();
        assert_eq!(json, "\"#00000080\"");
    }

    #[test]
    fn test_serde_deserialize_hex() {
        let c: Color = serde_json::from_str("\"#0000ff\"").unwrap();
        assert_eq!(c, Color::BLUE);
    }

    #[test]
    fn test_serde_deserialize_invalid() {
        let result: Result<Color, _> = serde_json::from_str("\"#zz\"");
        assert!(result.is_err());
    }
}
