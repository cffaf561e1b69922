//! Kinema Core
//!
//! Foundational primitives shared by the kinema crates:
//!
//! - **Document model**: root attributes and named regions that the theme
//!   and scroll layers read and write
//! - **Geometry**: rects and viewports used for trigger math
//! - **Colors**: the value type palettes hand to the styling layer

pub mod color;
pub mod document;
pub mod geometry;

pub use color::Color;
pub use document::{Document, Region};
pub use geometry::{Rect, Viewport};
