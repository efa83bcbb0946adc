//! Core drawing types for atomic-blog.
//!
//! These are what the view tree writes into and what the renderer
//! understands. Nothing here knows about posts or the store.

use crossterm::style::Color as TermColor;

// =============================================================================
// Color
// =============================================================================

/// A terminal color.
///
/// `Default` lets the terminal pick (respects the user's scheme), `Ansi`
/// indexes the 256-color palette, `Rgb` is truecolor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Ansi(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Rgb(0, 0, 0);
    pub const WHITE: Self = Self::Rgb(255, 255, 255);

    /// Build from a 0xRRGGBB integer.
    ///
    /// ```
    /// use atomic_blog::types::Color;
    ///
    /// assert_eq!(Color::from_rgb_int(0x282a36), Color::Rgb(40, 42, 54));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::Rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Check if this is the terminal default.
    #[inline]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl From<Color> for TermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Default => TermColor::Reset,
            Color::Ansi(index) => TermColor::AnsiValue(index),
            Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell.
///
/// `ch == '\0'` marks the right half of a wide character; the renderer
/// skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attr,
}

impl Cell {
    /// A blank cell with the given background.
    pub const fn blank(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: Color::Default,
            bg,
            attrs: Attr::NONE,
        }
    }

    /// Check if this cell continues a wide character.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.ch == '\0'
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Color::Default)
    }
}

// =============================================================================
// Style
// =============================================================================

/// Foreground, background and attributes applied to drawn text.
///
/// A `None` background keeps whatever the cell already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Option<Color>,
    pub attrs: Attr,
}

impl Style {
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: None,
            attrs: Attr::NONE,
        }
    }

    pub const fn bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub const fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }
}

// =============================================================================
// Rect
// =============================================================================

/// A rectangular area of the screen, also used for clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute intersection of two rects.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Shrink by `n` cells on every side.
    pub fn inset(&self, n: u16) -> Rect {
        let twice = n.saturating_mul(2);
        Rect::new(
            self.x.saturating_add(n),
            self.y.saturating_add(n),
            self.width.saturating_sub(twice),
            self.height.saturating_sub(twice),
        )
    }

    /// Split off the top `rows` rows. Returns `(top, rest)`.
    pub fn split_top(&self, rows: u16) -> (Rect, Rect) {
        let rows = rows.min(self.height);
        (
            Rect::new(self.x, self.y, self.width, rows),
            Rect::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// Split off the bottom `rows` rows. Returns `(rest, bottom)`.
    pub fn split_bottom(&self, rows: u16) -> (Rect, Rect) {
        let rows = rows.min(self.height);
        let rest = self.height - rows;
        (
            Rect::new(self.x, self.y, self.width, rest),
            Rect::new(self.x, self.y + rest, self.width, rows),
        )
    }

    /// Split off the left `cols` columns. Returns `(left, rest)`.
    pub fn split_left(&self, cols: u16) -> (Rect, Rect) {
        let cols = cols.min(self.width);
        (
            Rect::new(self.x, self.y, cols, self.height),
            Rect::new(self.x + cols, self.y, self.width - cols, self.height),
        )
    }

    /// One row of this rect (relative to its top). Empty if out of range.
    pub fn row(&self, offset: u16) -> Rect {
        if offset >= self.height {
            return Rect::new(self.x, self.bottom(), self.width, 0);
        }
        Rect::new(self.x, self.y + offset, self.width, 1)
    }
}

// =============================================================================
// Border Style
// =============================================================================

/// Border styles used by panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    None,
    /// ─ │ ┌ ┐ └ ┘
    Single,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold,
}

impl BorderStyle {
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::None => (' ', ' ', ' ', ' ', ' ', ' '),
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            Self::Bold => ('━', '┃', '┏', '┓', '┛', '┗'),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_crossterm() {
        assert_eq!(TermColor::from(Color::Default), TermColor::Reset);
        assert_eq!(TermColor::from(Color::Ansi(12)), TermColor::AnsiValue(12));
        assert_eq!(
            TermColor::from(Color::Rgb(1, 2, 3)),
            TermColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(2, 2, 4, 4);
        assert!(r.contains(2, 2));
        assert!(r.contains(5, 5));
        assert!(!r.contains(6, 6));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));

        let c = Rect::new(20, 20, 2, 2);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_rect_splits() {
        let r = Rect::new(0, 0, 80, 24);

        let (top, rest) = r.split_top(3);
        assert_eq!(top, Rect::new(0, 0, 80, 3));
        assert_eq!(rest, Rect::new(0, 3, 80, 21));

        let (rest, bottom) = r.split_bottom(1);
        assert_eq!(rest.height, 23);
        assert_eq!(bottom, Rect::new(0, 23, 80, 1));

        let (left, right) = r.split_left(50);
        assert_eq!(left.width, 50);
        assert_eq!(right, Rect::new(50, 0, 30, 24));

        // Oversized splits clamp
        let (top, rest) = r.split_top(100);
        assert_eq!(top.height, 24);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_rect_inset_and_row() {
        let r = Rect::new(0, 0, 10, 5);
        assert_eq!(r.inset(1), Rect::new(1, 1, 8, 3));
        assert_eq!(r.row(2), Rect::new(0, 2, 10, 1));
        assert!(r.row(5).is_empty());
    }
}
