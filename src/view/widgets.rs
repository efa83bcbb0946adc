//! Widgets - drawing and editing helpers shared by the view components.
//!
//! Buttons, text fields and scrollable lists all draw the same way wherever
//! they appear; the components decide what they mean.

use crate::layout::{string_width, tail_text, truncate_text};
use crate::renderer::FrameBuffer;
use crate::state::KeyboardEvent;
use crate::theme::Theme;
use crate::types::{Rect, Style};

/// Caret drawn after the text of a focused field.
const CARET: char = '▏';

// =============================================================================
// Button
// =============================================================================

/// Columns a button with `label` occupies.
pub fn button_width(label: &str) -> u16 {
    string_width(label) + 2
}

/// Draw ` label ` at `(x, y)`. Returns the columns used.
pub fn draw_button(
    buf: &mut FrameBuffer,
    x: u16,
    y: u16,
    label: &str,
    focused: bool,
    theme: &Theme,
    clip: Rect,
) -> u16 {
    let style = theme.button_style(focused);
    let mut col = x;
    col += buf.draw_text(col, y, " ", style, clip);
    col += buf.draw_text(col, y, label, style, clip);
    col += buf.draw_text(col, y, " ", style, clip);
    col - x
}

// =============================================================================
// Text Field
// =============================================================================

/// Draw a single-line field filling `area`'s first row.
///
/// Empty fields show the placeholder. A focused field keeps the end of its
/// value visible and draws a caret after it.
pub fn draw_field(
    buf: &mut FrameBuffer,
    area: Rect,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    if area.is_empty() {
        return;
    }
    let row = area.row(0);
    let style = theme.field_style(focused);
    for col in row.x..row.right() {
        buf.set_cell(col, row.y, ' ', style, row);
    }

    let inner = Rect::new(row.x + 1, row.y, row.width.saturating_sub(2), 1);
    if value.is_empty() {
        let placeholder_style = Style {
            fg: theme.text_muted,
            ..style
        };
        let text = truncate_text(placeholder, inner.width.saturating_sub(1));
        let used = buf.draw_text(inner.x, inner.y, &text, placeholder_style, inner);
        if focused && used == 0 {
            buf.set_cell(inner.x, inner.y, CARET, style, inner);
        }
        return;
    }

    if focused {
        // Reserve a cell for the caret
        let visible = tail_text(value, inner.width.saturating_sub(1));
        let used = buf.draw_text(inner.x, inner.y, visible, style, inner);
        buf.set_cell(inner.x + used, inner.y, CARET, style, inner);
    } else {
        let text = truncate_text(value, inner.width);
        buf.draw_text(inner.x, inner.y, &text, style, inner);
    }
}

/// Apply an editing key to `value`.
///
/// Printable characters append, Backspace removes the last character.
/// Returns the new value, or None when the key is not an edit.
pub fn edit_text(value: &str, event: &KeyboardEvent) -> Option<String> {
    if let Some(ch) = event.text_char() {
        let mut next = String::with_capacity(value.len() + ch.len_utf8());
        next.push_str(value);
        next.push(ch);
        return Some(next);
    }

    if event.key == "Backspace" {
        let mut next = value.to_string();
        next.pop();
        return Some(next);
    }

    None
}

// =============================================================================
// Lists
// =============================================================================

/// Move a list position for a navigation key.
///
/// `page` is the number of entries that fit on screen. The result is
/// clamped to `0..len`; None when the key is not a navigation key.
pub fn navigate(event: &KeyboardEvent, current: usize, len: usize, page: usize) -> Option<usize> {
    let last = len.saturating_sub(1);
    let page = page.max(1);

    let next = match event.key.as_str() {
        "ArrowDown" => current.saturating_add(1),
        "ArrowUp" => current.saturating_sub(1),
        "PageDown" => current.saturating_add(page),
        "PageUp" => current.saturating_sub(page),
        "Home" => 0,
        "End" => last,
        _ => return None,
    };
    Some(next.min(last))
}

// =============================================================================
// Tests
// =============================================================================
