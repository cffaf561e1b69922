//! Tween properties
//!
//! The pose a reveal animates from or to. Only the properties the page
//! actually animates: opacity, translation, and uniform scale. Unset
//! properties mean "leave at rest".

/// A set of optional animated properties.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TweenProps {
    /// Opacity (0.0 to 1.0)
    pub opacity: Option<f32>,
    /// Translation X in pixels
    pub translate_x: Option<f32>,
    /// Translation Y in pixels
    pub translate_y: Option<f32>,
    /// Uniform scale factor
    pub scale: Option<f32>,
}

impl TweenProps {
    /// The resting pose: fully visible, untransformed.
    pub fn rest() -> Self {
        Self {
            opacity: Some(1.0),
            translate_x: Some(0.0),
            translate_y: Some(0.0),
            scale: Some(1.0),
        }
    }

    pub fn opacity(value: f32) -> Self {
        Self {
            opacity: Some(value),
            ..Default::default()
        }
    }

    /// Builder: set opacity
    pub fn with_opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    /// Builder: set Y translation
    pub fn with_translate_y(mut self, px: f32) -> Self {
        self.translate_y = Some(px);
        self
    }

    /// Builder: set X translation
    pub fn with_translate_x(mut self, px: f32) -> Self {
        self.translate_x = Some(px);
        self
    }

    /// Builder: set uniform scale
    pub fn with_scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    /// Interpolate toward `other`. Properties set on only one side are
    /// carried through unchanged.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: lerp_opt(self.opacity, other.opacity, t),
            translate_x: lerp_opt(self.translate_x, other.translate_x, t),
            translate_y: lerp_opt(self.translate_y, other.translate_y, t),
            scale: lerp_opt(self.scale, other.scale, t),
        }
    }

    /// Resolved opacity (defaults to 1.0 when unset).
    pub fn resolved_opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    /// Resolved translation (defaults to 0.0 when unset).
    pub fn resolved_translate(&self) -> (f32, f32) {
        (
            self.translate_x.unwrap_or(0.0),
            self.translate_y.unwrap_or(0.0),
        )
    }

    /// Resolved scale (defaults to 1.0 when unset).
    pub fn resolved_scale(&self) -> f32 {
        self.scale.unwrap_or(1.0)
    }
}

fn lerp_opt(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
