//! Geometry primitives for trigger and layout math

/// An axis-aligned rectangle in document coordinates.
///
/// `y` grows downward; a region further down the page has a larger `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge in document coordinates.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge in document coordinates.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Left edge in document coordinates.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge in document coordinates.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// The visible window the document scrolls through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Document coordinate of a viewport-relative line for a given scroll
    /// offset. `fraction` 0.0 is the viewport top, 1.0 the bottom.
    pub fn line_at(&self, scroll_offset: f32, fraction: f32) -> f32 {
        scroll_offset + self.height * fraction
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}
