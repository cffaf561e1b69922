//! Reveal presets for common entrance animations

use crate::easing::Easing;
use crate::properties::TweenProps;
use crate::timeline::RevealTimeline;

/// Pre-built reveals for common entrance patterns
pub struct RevealPreset;

impl RevealPreset {
    /// Fade in from transparent.
    pub fn fade_in(duration_ms: u32) -> RevealTimeline {
        RevealTimeline::new(TweenProps::opacity(0.0), duration_ms, Easing::EaseOutCubic)
    }

    /// Rise into place while fading in: starts `distance` px below rest.
    pub fn fade_up(duration_ms: u32, distance: f32) -> RevealTimeline {
        RevealTimeline::new(
            TweenProps::opacity(0.0).with_translate_y(distance),
            duration_ms,
            Easing::EaseOutCubic,
        )
    }

    /// Grow from `scale` while fading in.
    pub fn scale_fade(duration_ms: u32, scale: f32) -> RevealTimeline {
        RevealTimeline::new(
            TweenProps::opacity(0.0).with_scale(scale),
            duration_ms,
            Easing::EaseOutCubic,
        )
    }
}
