//! Kinema Portfolio App
//!
//! The single-page portfolio assembled from the framework crates: a static
//! page layout, a fixed navbar, the light/dark theme controller, and the
//! smooth-scroll reveal pipeline.
//!
//! # Quick Start
//!
//! ```rust
//! use kinema_app::{NavLink, Portfolio};
//! use kinema_core::Viewport;
//! use kinema_scroll::SmoothScrollConfig;
//! use kinema_theme::MemoryStore;
//!
//! let portfolio = Portfolio::new(
//!     MemoryStore::new(),
//!     SmoothScrollConfig::default(),
//!     Viewport::default(),
//! );
//! assert_eq!(portfolio.theme_marker().as_deref(), Some("light"));
//! portfolio.navigate(NavLink::Projects);
//! ```

pub mod navbar;
pub mod page;
pub mod portfolio;

pub use navbar::{NavLink, Navbar};
pub use portfolio::Portfolio;
