//! Layout - screen partitioning and text measurement.
//!
//! The blog screen is a fixed arrangement, so layout is a handful of rect
//! splits rather than a flexbox pass:
//!
//! ```text
//! ┌──────────────────────── header ────────────────────────┐
//! ├──────────── main ─────────────┬──────── archive ───────┤
//! └──────────────────────── footer ────────────────────────┘
//! ```

pub mod text_measure;

pub use text_measure::{
    char_width, measure_text_height, string_width, tail_text, truncate_text, wrap_text,
};

use crate::types::Rect;

/// Rows reserved for the header (title, controls, rule).
pub const HEADER_ROWS: u16 = 3;

/// Rows reserved for the footer.
pub const FOOTER_ROWS: u16 = 1;

/// Below this width the archive panel is not shown at all.
pub const MIN_ARCHIVE_WIDTH: u16 = 24;

/// Computed areas for each top-level node of the view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub main: Rect,
    pub archive: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    /// Partition the terminal area.
    ///
    /// The archive takes two fifths of the body width, or nothing when that
    /// would be narrower than [`MIN_ARCHIVE_WIDTH`].
    pub fn compute(area: Rect) -> Self {
        let (header, rest) = area.split_top(HEADER_ROWS);
        let (body, footer) = rest.split_bottom(FOOTER_ROWS);

        let archive_width = body.width * 2 / 5;
        let (main, archive) = if archive_width >= MIN_ARCHIVE_WIDTH {
            body.split_left(body.width - archive_width)
        } else {
            (body, Rect::new(body.right(), body.y, 0, body.height))
        };

        Self {
            header,
            main,
            archive,
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_terminal() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.header, Rect::new(0, 0, 100, 3));
        assert_eq!(layout.footer, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.main, Rect::new(0, 3, 60, 26));
        assert_eq!(layout.archive, Rect::new(60, 3, 40, 26));
    }

    #[test]
    fn test_layout_narrow_terminal_drops_archive() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 50, 20));

        assert_eq!(layout.main.width, 50);
        assert!(layout.archive.is_empty());
    }

    #[test]
    fn test_layout_tiny_terminal() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 10, 2));

        assert_eq!(layout.header.height, 2);
        assert!(layout.main.is_empty());
        assert!(layout.footer.is_empty());
    }
}
