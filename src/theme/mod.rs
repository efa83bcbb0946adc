//! Theme System for atomic-blog.
//!
//! A theme is a set of semantic colors. The app has two presets, light and
//! dark, and flips between them with the dark-mode toggle. Components never
//! name a concrete color; they ask the theme for `primary`, `text_muted`,
//! `border_focus` and so on.
//!
//! # Example
//!
//! ```rust
//! use atomic_blog::theme::Theme;
//!
//! let theme = Theme::for_mode(true);
//! assert_eq!(theme.name, "dark");
//! ```

pub mod presets;

pub use presets::{dark, light};

use crate::types::{Attr, Color, Style};

// =============================================================================
// Theme
// =============================================================================

/// Semantic palette used by every view component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,

    // Main palette
    pub primary: Color,
    pub accent: Color,
    pub error: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub text_bright: Color,

    // Background
    pub background: Color,
    pub surface: Color,

    // Border
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    /// The dark preset when `dark` is set, the light one otherwise.
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            presets::dark()
        } else {
            presets::light()
        }
    }

    // =========================================================================
    // Derived styles
    // =========================================================================

    /// Plain body text.
    pub fn text_style(&self) -> Style {
        Style::fg(self.text)
    }

    /// Secondary text (placeholders, hints).
    pub fn muted_style(&self) -> Style {
        Style::fg(self.text_muted)
    }

    /// Headings and titles.
    pub fn heading_style(&self) -> Style {
        Style::fg(self.primary).attrs(Attr::BOLD)
    }

    /// A button label; focused buttons are drawn inverted.
    pub fn button_style(&self, focused: bool) -> Style {
        if focused {
            Style::fg(self.text_bright).bg(self.primary).attrs(Attr::BOLD)
        } else {
            Style::fg(self.primary).bg(self.surface)
        }
    }

    /// A text field's content area.
    pub fn field_style(&self, focused: bool) -> Style {
        let fg = if focused { self.text_bright } else { self.text };
        Style::fg(fg).bg(self.surface)
    }

    /// The cursor row of a focused list.
    pub fn selection_style(&self) -> Style {
        Style::fg(self.text_bright).bg(self.accent)
    }

    /// Border color, highlighted when the area holds focus.
    pub fn border_color(&self, focused: bool) -> Color {
        if focused { self.border_focus } else { self.border }
    }
}

impl Default for Theme {
    fn default() -> Self {
        presets::light()
    }
}

// =============================================================================
// Tests
// =============================================================================
