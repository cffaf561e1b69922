//! Preference storage
//!
//! A single-key-value persistence seam. The controller only ever touches
//! the `"theme"` key, but the store is a plain string map so the same file
//! can carry other preferences later.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage failure. Callers above the controller never see these; the
/// controller logs and degrades to in-memory operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("preference serialization: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Key-value persistence for user preferences.
pub trait KeyValueStore {
    /// Read a stored value. `Ok(None)` means nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Persist a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// TOML-file-backed store (one `key = "value"` table).
///
/// Reads the whole file on `get` and rewrites it on `set`; preference
/// traffic is a handful of writes per session, so simplicity wins.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&map)?)?;
        Ok(())
    }
}

/// In-memory store: session-only fallback and test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store whose backing medium is unavailable (storage disabled).
///
/// Every access fails; used to exercise silent-degradation paths.
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Io(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        )))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        )))
    }
}
