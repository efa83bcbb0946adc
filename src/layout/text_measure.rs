//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII characters: 1 cell
//! - CJK characters and most emoji: 2 cells
//! - Control and zero-width characters: 0 cells

use unicode_width::UnicodeWidthChar;

/// Display width of a single character in cells.
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .fold(0u16, |width, c| width.saturating_add(char_width(c)))
}

/// Measure the height of text when wrapped to a given width.
///
/// Returns the number of lines (minimum 1 for non-empty text, 0 for empty).
pub fn measure_text_height(text: &str, available_width: u16) -> u16 {
    wrap_text(text, available_width).len() as u16
}

/// Wrap text to fit within a given width.
///
/// Breaks at word boundaries where possible; words longer than the width
/// are split mid-word. Explicit newlines always start a new line.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0u16;

        for word in paragraph.split(' ') {
            let word_width = string_width(word);
            let sep = if current_line.is_empty() { 0 } else { 1 };

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current_line.push(' ');
                }
                current_line.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }

            // Hard-split words that cannot fit on a line of their own
            for c in word.chars() {
                let cw = char_width(c);
                if current_width + cw > width && !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }
                current_line.push(c);
                current_width += cw;
            }
        }

        lines.push(current_line);
    }

    lines
}

/// Truncate text to fit within a given width.
///
/// If text is longer than width, it's truncated and an ellipsis is added.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width {
        return text.to_string();
    }

    // Leave room for the ellipsis
    let target_width = width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        let cw = char_width(c);
        if current_width + cw > target_width {
            break;
        }
        result.push(c);
        current_width += cw;
    }

    result.push('…');
    result
}

/// Keep the last `width` cells of text. Used by input fields so the caret
/// end stays visible while typing.
pub fn tail_text(text: &str, width: u16) -> &str {
    let mut used = 0u16;
    let mut start = text.len();

    for (idx, c) in text.char_indices().rev() {
        let cw = char_width(c);
        if used + cw > width {
            break;
        }
        used += cw;
        start = idx;
    }

    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a b c"), 5);
    }

    #[test]
    fn test_string_width_wide() {
        assert_eq!(string_width("🚀"), 2);
        assert_eq!(string_width("日本"), 4);
    }

    #[test]
    fn test_measure_text_height() {
        assert_eq!(measure_text_height("hello", 10), 1);
        assert_eq!(measure_text_height("hello world", 5), 2);
        assert_eq!(measure_text_height("", 10), 0);
        assert_eq!(measure_text_height("a\nb\nc", 10), 3);
    }

    #[test]
    fn test_wrap_text_words() {
        let lines = wrap_text("hello big world", 9);
        assert_eq!(lines, vec!["hello big", "world"]);
    }

    #[test]
    fn test_wrap_text_long_word() {
        let lines = wrap_text("abcdefgh", 3);
        assert_eq!(lines, vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_text_newlines() {
        let lines = wrap_text("a\nb", 10);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("", 5), "");
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("hello", 4), "hel…");
    }

    #[test]
    fn test_tail_text() {
        assert_eq!(tail_text("hello world", 5), "world");
        assert_eq!(tail_text("hi", 5), "hi");
        assert_eq!(tail_text("abc", 0), "");
    }
}
