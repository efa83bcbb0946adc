//! Footer: copyright line and key hints.

use super::Component;
use crate::error::Result;
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::Rect;

pub const COPYRIGHT: &str = "© by The Atomic Blog ✌️";
pub const KEY_HINTS: &str = "Tab focus · Enter select · Esc quit";

#[derive(Debug, Clone, Copy, Default)]
pub struct Footer;

impl Component for Footer {
    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        let row = area.row(0);
        if row.is_empty() {
            return Ok(());
        }
        let used = buf.draw_text(row.x + 1, row.y, COPYRIGHT, theme.muted_style(), row);

        // Hints only when they fit beside the copyright
        let hints_width = crate::layout::string_width(KEY_HINTS);
        if used + hints_width + 3 <= row.width {
            let hints = Rect::new(row.x, row.y, row.width - 1, 1);
            buf.draw_text_right(hints, KEY_HINTS, theme.muted_style());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_wide() {
        let mut buf = FrameBuffer::new(80, 1);
        Footer.render(&mut buf, Rect::new(0, 0, 80, 1), &Theme::default()).unwrap();

        let row = buf.row_text(0);
        assert!(row.contains("by The Atomic Blog"));
        assert!(row.contains("Esc quit"));
    }

    #[test]
    fn test_footer_narrow_drops_hints() {
        let mut buf = FrameBuffer::new(30, 1);
        Footer.render(&mut buf, Rect::new(0, 0, 30, 1), &Theme::default()).unwrap();

        let row = buf.row_text(0);
        assert!(row.contains("by The Atomic Blog"));
        assert!(!row.contains("Esc"));
    }
}
