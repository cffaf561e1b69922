//! Theme controller
//!
//! Owns the current theme mode and is the single writer of the document's
//! theme marker and the persisted `"theme"` preference. Consumers receive
//! the controller (or read the marker) instead of reaching into globals.

use crate::mode::ThemeMode;
use crate::store::KeyValueStore;
use kinema_core::Document;

/// Document attribute the styling layer reads.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Storage key for the persisted mode.
const STORAGE_KEY: &str = "theme";

/// Owns the theme value; reflects it onto the document and storage.
pub struct ThemeController<S: KeyValueStore> {
    mode: ThemeMode,
    store: S,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Resolve the startup mode from a store.
    ///
    /// Absent key, unrecognized value, or a failing store all resolve to
    /// `Light`. Never fails; storage trouble is logged and swallowed.
    pub fn initial_mode(store: &S) -> ThemeMode {
        match store.get(STORAGE_KEY) {
            Ok(Some(value)) => match ThemeMode::parse(&value) {
                Some(mode) => mode,
                None => {
                    tracing::debug!(value = %value, "ignoring unrecognized stored theme");
                    ThemeMode::Light
                }
            },
            Ok(None) => ThemeMode::Light,
            Err(err) => {
                tracing::warn!(error = %err, "theme storage unavailable, defaulting to light");
                ThemeMode::Light
            }
        }
    }

    /// Create a controller, reading the initial mode from the store.
    pub fn new(store: S) -> Self {
        let mode = Self::initial_mode(&store);
        Self { mode, store }
    }

    /// The current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Reflect the current mode onto the document marker and persist it.
    ///
    /// Idempotent: applying the same mode twice leaves marker and storage
    /// exactly as one application would. A failing store degrades silently;
    /// the marker is still written so the session keeps its theme.
    pub fn apply(&mut self, document: &mut Document) {
        document.set_attribute(THEME_ATTRIBUTE, self.mode.as_str());

        if let Err(err) = self.store.set(STORAGE_KEY, self.mode.as_str()) {
            tracing::warn!(error = %err, mode = %self.mode, "theme not persisted");
        }
    }

    /// Switch to a specific mode and apply it.
    pub fn set_mode(&mut self, mode: ThemeMode, document: &mut Document) {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "theme switch");
            self.mode = mode;
        }
        self.apply(document);
    }

    /// Flip light/dark and apply.
    pub fn toggle(&mut self, document: &mut Document) -> ThemeMode {
        self.set_mode(self.mode.toggle(), document);
        self.mode
    }

    /// Access the backing store (used by tests to inspect persisted state).
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, UnavailableStore};

    #[test]
    fn apply_is_idempotent() {
        let mut doc = Document::new();
        let mut theme = ThemeController::new(MemoryStore::new());

        theme.apply(&mut doc);
        let marker_once = doc.attribute(THEME_ATTRIBUTE).map(str::to_owned);
        let stored_once = theme.store().get("theme").unwrap();

        theme.apply(&mut doc);
        assert_eq!(doc.attribute(THEME_ATTRIBUTE).map(str::to_owned), marker_once);
        assert_eq!(theme.store().get("theme").unwrap(), stored_once);
    }

    #[test]
    fn marker_and_storage_agree_after_every_transition() {
        let mut doc = Document::new();
        let mut theme = ThemeController::new(MemoryStore::new());

        for _ in 0..4 {
            theme.toggle(&mut doc);
            assert_eq!(doc.attribute(THEME_ATTRIBUTE), Some(theme.mode().as_str()));
            assert_eq!(
                theme.store().get("theme").unwrap().as_deref(),
                Some(theme.mode().as_str())
            );
        }
    }

    #[test]
    fn unrecognized_stored_value_defaults_to_light() {
        let mut store = MemoryStore::new();
        store.set("theme", "sepia").unwrap();
        assert_eq!(ThemeController::initial_mode(&store), ThemeMode::Light);
    }

    #[test]
    fn unavailable_storage_still_themes_the_session() {
        let mut doc = Document::new();
        let mut theme = ThemeController::new(UnavailableStore);
        assert_eq!(theme.mode(), ThemeMode::Light);

        theme.toggle(&mut doc);
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(doc.attribute(THEME_ATTRIBUTE), Some("dark"));
    }
}
