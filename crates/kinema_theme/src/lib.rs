//! Kinema Theme System
//!
//! Light/dark theming with persistence and a document-marker contract.
//!
//! # Overview
//!
//! - [`ThemeMode`]: the binary light/dark value with a pure `toggle`
//! - [`ThemeController`]: owns the current mode, reflects it onto the
//!   document marker, and persists it through a [`KeyValueStore`]
//! - [`ThemePalette`]: the color tokens the styling layer resolves from
//!   the marker
//!
//! # Quick Start
//!
//! ```rust
//! use kinema_core::Document;
//! use kinema_theme::{MemoryStore, ThemeController, ThemeMode};
//!
//! let mut doc = Document::new();
//! let mut theme = ThemeController::new(MemoryStore::new());
//! theme.apply(&mut doc);
//! assert_eq!(doc.attribute("data-theme"), Some("light"));
//!
//! theme.toggle(&mut doc);
//! assert_eq!(theme.mode(), ThemeMode::Dark);
//! assert_eq!(doc.attribute("data-theme"), Some("dark"));
//! ```
//!
//! Persistence is best-effort: when the backing store is unavailable the
//! controller keeps working in memory for the session and degrades silently.

pub mod controller;
pub mod mode;
pub mod palette;
pub mod store;

pub use controller::{ThemeController, THEME_ATTRIBUTE};
pub use mode::ThemeMode;
pub use palette::ThemePalette;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, UnavailableStore};
