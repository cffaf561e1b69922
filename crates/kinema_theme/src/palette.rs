//! Theme palettes
//!
//! The color tokens the styling layer resolves once it has read the
//! document marker. Two fixed palettes; nothing here animates.

use crate::mode::ThemeMode;
use kinema_core::Color;

/// Semantic colors for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemePalette {
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub border: Color,
}

impl ThemePalette {
    pub fn light() -> Self {
        Self {
            background: Color::from_hex(0xf8f9fa),
            surface: Color::WHITE,
            text_primary: Color::from_hex(0x1a1a2e),
            text_secondary: Color::from_hex(0x4a4a68),
            accent: Color::from_hex(0x6c63ff),
            border: Color::from_hex(0xe0e0e6),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_hex(0x12121a),
            surface: Color::from_hex(0x1c1c28),
            text_primary: Color::from_hex(0xf0f0f5),
            text_secondary: Color::from_hex(0xa0a0b8),
            accent: Color::from_hex(0x8a82ff),
            border: Color::from_hex(0x2e2e3e),
        }
    }

    /// Palette for a mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Crossfade toward another palette (theme transition animation).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            background: self.background.lerp(other.background, t),
            surface: self.surface.lerp(other.surface, t),
            text_primary: self.text_primary.lerp(other.text_primary, t),
            text_secondary: self.text_secondary.lerp(other.text_secondary, t),
            accent: self.accent.lerp(other.accent, t),
            border: self.border.lerp(other.border, t),
        }
    }
}
