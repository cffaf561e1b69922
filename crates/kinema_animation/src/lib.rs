//! Kinema Animation System
//!
//! Easing curves, tween properties, and reversible reveal timelines.
//!
//! # Features
//!
//! - **Easing**: monotonic [0,1] -> [0,1] curves, including the smooth-scroll
//!   exponential ease and CSS-style cubic beziers
//! - **Reveal Timelines**: two-pose animations that play forward and reverse
//!   deterministically, with per-child stagger for lists
//! - **Presets**: the entrance animations the portfolio page uses

pub mod easing;
pub mod presets;
pub mod properties;
pub mod timeline;

pub use easing::Easing;
pub use presets::RevealPreset;
pub use properties::TweenProps;
pub use timeline::{PlayDirection, RevealTimeline};
