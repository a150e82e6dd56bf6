//! Headless test harness for Starling widgets.
//!
//! Lay a widget out, drive it with simulated clicks and drags, then inspect
//! the messages it emitted and what it painted:
//!
//! ```
//! use starling_test::Harness;
//! use starling_widgets::{RatingChanged, RatingConfig, StarRating, StepType};
//!
//! let stars = StarRating::new(0.0, RatingConfig::new().step_type(StepType::Full))
//!     .with_test_id("stars");
//! let mut harness = Harness::new(stars);
//!
//! harness.click_at("[data-testid='stars']", 20.0);
//! assert_eq!(harness.last_message::<RatingChanged>().unwrap().rating, 1.0);
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};
