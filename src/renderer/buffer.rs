//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be
//! displayed on the terminal. The view tree draws into it; the renderer
//! diffs and outputs it.
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Clipping**: every drawing call takes the `Rect` it must stay inside.
//! - **Wide characters**: emoji and CJK use a continuation cell.

use crate::layout::char_width;
use crate::types::{Attr, BorderStyle, Cell, Color, Rect, Style};

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, Color::Default)
    }

    /// Create a new buffer with a specific background color.
    pub fn with_background(width: u16, height: u16, bg: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::blank(bg); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Raw cells slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Read back one row as a string, skipping continuation cells.
    ///
    /// Trailing spaces are trimmed. Mostly useful for tests and logging.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let row: String = self.cells[start..start + self.width as usize]
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect();
        row.trim_end().to_string()
    }

    /// Find the first row containing `needle`.
    pub fn find_row(&self, needle: &str) -> Option<u16> {
        (0..self.height).find(|&y| self.row_text(y).contains(needle))
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell if it lies inside `clip`.
    ///
    /// Returns true if the cell was set.
    pub fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style, clip: Rect) -> bool {
        if !self.in_bounds(x, y) || !clip.contains(x, y) {
            return false;
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.ch = ch;
        cell.fg = style.fg;
        if let Some(bg) = style.bg {
            cell.bg = bg;
        }
        cell.attrs = style.attrs;
        true
    }

    /// Fill a rectangle with a background color.
    pub fn fill_rect(&mut self, area: Rect, bg: Color) {
        let Some(area) = area.intersect(&self.bounds()) else {
            return;
        };

        for row in area.y..area.bottom() {
            let start = self.index(area.x, row);
            let end = self.index(area.right(), row);
            for cell in &mut self.cells[start..end] {
                *cell = Cell::blank(bg);
            }
        }
    }

    /// Draw text starting at `(x, y)`, clipped to `clip`.
    ///
    /// Returns the number of columns advanced (handles wide characters).
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style, clip: Rect) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width || col >= clip.right() {
                break;
            }

            let cw = char_width(ch);
            if cw == 0 {
                continue;
            }

            // A wide char that would straddle the clip edge is dropped
            if cw == 2 && col + 1 >= clip.right() {
                self.set_cell(col, y, ' ', style, clip);
                col += 1;
                break;
            }

            if self.set_cell(col, y, ch, style, clip) && cw == 2 {
                self.set_cell(col + 1, y, '\0', style, clip);
            }

            col += cw;
        }

        col.saturating_sub(x)
    }

    /// Draw text right-aligned within `area`'s first row.
    pub fn draw_text_right(&mut self, area: Rect, text: &str, style: Style) -> u16 {
        let text_width = crate::layout::string_width(text);
        let offset = area.width.saturating_sub(text_width);
        self.draw_text(area.x + offset, area.y, text, style, area)
    }

    /// Draw a border around a rectangle.
    pub fn draw_border(&mut self, area: Rect, border: BorderStyle, color: Color, clip: Rect) {
        if area.width < 2 || area.height < 2 || border == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = border.chars();
        let style = Style::fg(color);

        let x2 = area.right() - 1;
        let y2 = area.bottom() - 1;

        self.set_cell(area.x, area.y, tl, style, clip);
        self.set_cell(x2, area.y, tr, style, clip);
        self.set_cell(x2, y2, br, style, clip);
        self.set_cell(area.x, y2, bl, style, clip);

        for col in (area.x + 1)..x2 {
            self.set_cell(col, area.y, horiz, style, clip);
            self.set_cell(col, y2, horiz, style, clip);
        }

        for row in (area.y + 1)..y2 {
            self.set_cell(area.x, row, vert, style, clip);
            self.set_cell(x2, row, vert, style, clip);
        }
    }

    /// Draw a horizontal rule across `area`'s first row.
    pub fn draw_hline(&mut self, area: Rect, ch: char, color: Color) {
        let style = Style::fg(color).attrs(Attr::DIM);
        for col in area.x..area.right() {
            self.set_cell(col, area.y, ch, style, area);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
