//! Document model
//!
//! An explicit stand-in for the page the app renders into: a set of
//! root-level string attributes (the theme marker lives here) plus named
//! regions that scroll triggers anchor to. The view layer owns region
//! creation; consumers look regions up by name and must tolerate absence.

use crate::geometry::Rect;
use rustc_hash::FxHashMap;

/// A named area of the page whose geometry drives animation playback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub bounds: Rect,
}

impl Region {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

/// The page document: root attributes and named regions.
///
/// Single-writer per concern - the theme controller owns the theme
/// attribute, the view layer owns regions. All access is serialized by the
/// caller (typically behind one `Arc<Mutex<Document>>`).
#[derive(Debug, Default)]
pub struct Document {
    attributes: FxHashMap<String, String>,
    regions: FxHashMap<String, Region>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Root attributes ==========

    /// Set a root attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Read a root attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Remove a root attribute. Removing an absent attribute is a no-op.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    // ========== Regions ==========

    /// Insert or replace a named region.
    pub fn insert_region(&mut self, name: impl Into<String>, region: Region) {
        let name = name.into();
        if self.regions.insert(name.clone(), region).is_some() {
            tracing::debug!("document region {name:?} replaced");
        }
    }

    /// Look up a region by name. Missing regions return `None`; callers
    /// treat bindings against them as inert.
    pub fn region(&self, name: &str) -> Option<Region> {
        self.regions.get(name).copied()
    }

    /// Remove a region, returning it if present.
    pub fn remove_region(&mut self, name: &str) -> Option<Region> {
        self.regions.remove(name)
    }

    /// Names of all mounted regions (unordered).
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Number of mounted regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}
