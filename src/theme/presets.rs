//! Theme presets: the light and dark palettes behind the 🌙 / ☀️ toggle.

use super::Theme;
use crate::types::Color;

// =============================================================================
// Light Theme
// =============================================================================

/// Light theme - warm paper background, dark ink.
pub fn light() -> Theme {
    Theme {
        name: "light",
        primary: Color::from_rgb_int(0x1098ad),
        accent: Color::from_rgb_int(0x66d9e8),
        error: Color::from_rgb_int(0xe03131),
        text: Color::from_rgb_int(0x343a40),
        text_muted: Color::from_rgb_int(0x868e96),
        text_bright: Color::from_rgb_int(0x212529),
        background: Color::from_rgb_int(0xf8f9fa),
        surface: Color::from_rgb_int(0xe9ecef),
        border: Color::from_rgb_int(0xced4da),
        border_focus: Color::from_rgb_int(0x1098ad),
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Dark theme - the same accents on a charcoal background.
pub fn dark() -> Theme {
    Theme {
        name: "dark",
        primary: Color::from_rgb_int(0x66d9e8),
        accent: Color::from_rgb_int(0x0c8599),
        error: Color::from_rgb_int(0xff8787),
        text: Color::from_rgb_int(0xdee2e6),
        text_muted: Color::from_rgb_int(0x868e96),
        text_bright: Color::from_rgb_int(0xf8f9fa),
        background: Color::from_rgb_int(0x212529),
        surface: Color::from_rgb_int(0x343a40),
        border: Color::from_rgb_int(0x495057),
        border_focus: Color::from_rgb_int(0x66d9e8),
    }
}
