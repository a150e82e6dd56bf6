//! Star-rating input control for the Starling widget framework.
//!
//! The rating math lives in small pure pieces:
//! - [`normalize`] clamps and quantizes a raw rating per [`StepType`]
//! - [`StarLayout`] maps a pointer offset to a rating and a rating back to a
//!   fill width
//!
//! [`StarRating`] wires them into a [`Widget`](starling_core::Widget) with a
//! [`RatingConfig`] that can be loaded from YAML or JSON.
//!
//! # Example
//!
//! ```
//! use starling_core::{Event, MouseButton, Point, Rect, Widget};
//! use starling_widgets::{RatingChanged, RatingConfig, StarRating, StepType};
//!
//! let config = RatingConfig::new().spacing(0.0).step_type(StepType::Full);
//! let mut stars = StarRating::new(0.0, config);
//! stars.layout(Rect::new(0.0, 0.0, 500.0, 100.0));
//!
//! let msg = stars.event(&Event::MouseDown {
//!     position: Point::new(250.0, 50.0),
//!     button: MouseButton::Left,
//! });
//! let changed = msg.unwrap().downcast::<RatingChanged>().unwrap();
//! assert_eq!(changed.rating, 3.0);
//! ```

mod config;
mod error;
pub mod rating;
mod star_layout;
mod star_shape;
mod step;

pub use config::RatingConfig;
pub use error::ConfigError;
pub use rating::{RatingChanged, StarRating};
pub use star_layout::StarLayout;
pub use star_shape::StarShape;
pub use step::{normalize, StepType};
