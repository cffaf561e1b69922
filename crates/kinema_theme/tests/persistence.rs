//! Theme persistence round-trips through a real preference file.

use kinema_core::Document;
use kinema_theme::{FileStore, KeyValueStore, ThemeController, ThemeMode, THEME_ATTRIBUTE};

#[test]
fn dark_mode_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.toml");

    let mut doc = Document::new();
    let mut theme = ThemeController::new(FileStore::new(&prefs));
    assert_eq!(theme.mode(), ThemeMode::Light);

    theme.toggle(&mut doc);
    assert_eq!(doc.attribute(THEME_ATTRIBUTE), Some("dark"));

    // simulated reload: a fresh controller over the same file
    let reloaded = ThemeController::new(FileStore::new(&prefs));
    assert_eq!(reloaded.mode(), ThemeMode::Dark);
}

#[test]
fn light_mode_round_trips_too() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.toml");

    let mut doc = Document::new();
    let mut theme = ThemeController::new(FileStore::new(&prefs));
    theme.toggle(&mut doc); // dark
    theme.toggle(&mut doc); // back to light, persisted

    let reloaded = ThemeController::new(FileStore::new(&prefs));
    assert_eq!(reloaded.mode(), ThemeMode::Light);
}

#[test]
fn missing_file_defaults_to_light() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("never-written.toml"));
    assert_eq!(ThemeController::initial_mode(&store), ThemeMode::Light);
}

#[test]
fn corrupted_file_defaults_to_light() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.toml");
    std::fs::write(&prefs, "not valid toml [[[").unwrap();

    let store = FileStore::new(&prefs);
    assert_eq!(ThemeController::initial_mode(&store), ThemeMode::Light);
}

#[test]
fn file_store_keeps_unrelated_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("prefs.toml"));
    store.set("locale", "en").unwrap();
    store.set("theme", "dark").unwrap();

    assert_eq!(store.get("locale").unwrap().as_deref(), Some("en"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn end_to_end_theme_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.toml");

    // start with nothing stored
    let mut doc = Document::new();
    let mut theme = ThemeController::new(FileStore::new(&prefs));
    assert_eq!(theme.mode(), ThemeMode::Light);

    // user toggles: marker and storage both flip to dark
    theme.toggle(&mut doc);
    assert_eq!(doc.attribute(THEME_ATTRIBUTE), Some("dark"));
    let stored = FileStore::new(&prefs).get("theme").unwrap();
    assert_eq!(stored.as_deref(), Some("dark"));

    // reload: dark comes back
    let reloaded = ThemeController::new(FileStore::new(&prefs));
    assert_eq!(reloaded.mode(), ThemeMode::Dark);
}
