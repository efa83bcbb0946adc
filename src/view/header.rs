//! Header: title row, then the results count, search field and clear button.

use tracing::info;

use super::widgets::{button_width, draw_button, draw_field, edit_text};
use super::{Cleanup, Component, focusable, ids, on_focused};
use crate::context::use_posts;
use crate::error::Result;
use crate::layout::string_width;
use crate::renderer::FrameBuffer;
use crate::state::focus;
use crate::theme::Theme;
use crate::types::Rect;

pub const TITLE: &str = "⚛️ The Atomic Blog";
pub const SEARCH_PLACEHOLDER: &str = "Search posts...";
pub const CLEAR_LABEL: &str = "Clear posts";

/// Widest the search field grows.
const MAX_SEARCH_WIDTH: u16 = 40;

/// Text of the results line for `count` visible posts.
pub fn results_text(count: usize) -> String {
    format!("🚀 {count} atomic posts found")
}

// =============================================================================
// Results
// =============================================================================

/// Count of currently visible posts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Results;

impl Component for Results {
    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        let count = use_posts()?.visible_posts().len();
        buf.draw_text(
            area.x,
            area.y,
            &results_text(count),
            theme.text_style(),
            area,
        );
        Ok(())
    }
}

// =============================================================================
// SearchPosts
// =============================================================================

/// Text field bound to the store's query. Every keystroke sets the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchPosts;

impl Component for SearchPosts {
    fn mount(&self) -> Result<Vec<Cleanup>> {
        let store = use_posts()?;
        Ok(vec![
            focusable(ids::SEARCH),
            on_focused(ids::SEARCH, move |event| {
                match edit_text(&store.query(), event) {
                    Some(query) => {
                        store.set_query(query);
                        true
                    }
                    None => false,
                }
            }),
        ])
    }

    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        let query = use_posts()?.query();
        let focused = focus::is_focused(ids::SEARCH);
        draw_field(buf, area, &query, SEARCH_PLACEHOLDER, focused, theme);
        Ok(())
    }
}

// =============================================================================
// ClearPosts
// =============================================================================

/// Button that empties the canonical collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearPosts;

impl Component for ClearPosts {
    fn mount(&self) -> Result<Vec<Cleanup>> {
        let store = use_posts()?;
        Ok(vec![
            focusable(ids::CLEAR),
            on_focused(ids::CLEAR, move |event| {
                if !event.is_activate() {
                    return false;
                }
                info!("clearing all posts");
                store.clear_posts();
                true
            }),
        ])
    }

    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        let focused = focus::is_focused(ids::CLEAR);
        draw_button(buf, area.x, area.y, CLEAR_LABEL, focused, theme, area);
        Ok(())
    }
}

// =============================================================================
// Header
// =============================================================================

/// Top three rows of the screen.
///
/// Row 0 holds the title (the app draws the theme toggle at its right
/// end), row 1 the controls, row 2 a rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Header {
    results: Results,
    search: SearchPosts,
    clear: ClearPosts,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for Header {
    fn mount(&self) -> Result<Vec<Cleanup>> {
        let mut cleanups = self.search.mount()?;
        cleanups.extend(self.clear.mount()?);
        Ok(cleanups)
    }

    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        if area.is_empty() {
            return Ok(());
        }

        let title_row = area.row(0);
        buf.draw_text(
            title_row.x + 1,
            title_row.y,
            TITLE,
            theme.heading_style(),
            title_row,
        );

        let controls = area.row(1);
        if !controls.is_empty() {
            let count = use_posts()?.visible_posts().len();
            let results_width = string_width(&results_text(count));
            let (results_area, rest) = controls.split_left(results_width + 3);
            self.results.render(
                buf,
                Rect::new(results_area.x + 1, results_area.y, results_width, 1),
                theme,
            )?;

            let clear_width = button_width(CLEAR_LABEL);
            let search_width = rest.width.saturating_sub(clear_width + 1);
            let (search_slot, clear_slot) = rest.split_left(search_width);
            let search_width = search_slot.width.saturating_sub(2).min(MAX_SEARCH_WIDTH);
            self.search.render(
                buf,
                Rect::new(search_slot.x, search_slot.y, search_width, 1),
                theme,
            )?;
            self.clear.render(buf, clear_slot, theme)?;
        }

        let rule = area.row(2);
        if !rule.is_empty() {
            buf.draw_hline(rule, '─', theme.border);
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{PostStore, provide_posts};
    use crate::post::Post;
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::reset_keyboard_state;
    use crate::state::{KeyboardEvent, route_keyboard_event};
    use std::rc::Rc;

    fn setup() -> PostStore {
        reset_focus_state();
        reset_keyboard_state();
        PostStore::with_posts(Rc::new(vec![
            Post::new("Neural Port", "Hack the bus!"),
            Post::new("Mobile Pixel", "Parse the feed!"),
        ]))
    }

    fn render(store: &PostStore, header: &Header) -> FrameBuffer {
        let mut buf = FrameBuffer::new(100, 3);
        let area = buf.bounds();
        provide_posts(store, || header.render(&mut buf, area, &Theme::default())).unwrap();
        buf
    }

    fn type_text(text: &str) {
        for ch in text.chars() {
            route_keyboard_event(KeyboardEvent::new(ch.to_string()));
        }
    }

    #[test]
    fn test_results_text() {
        assert_eq!(results_text(30), "🚀 30 atomic posts found");
        assert_eq!(results_text(0), "🚀 0 atomic posts found");
    }

    #[test]
    fn test_render_outside_scope_fails() {
        setup();
        let mut buf = FrameBuffer::new(40, 3);
        let area = buf.bounds();
        let result = Results.render(&mut buf, area, &Theme::default());
        assert!(matches!(result, Err(crate::error::Error::ContextUnavailable)));
    }

    #[test]
    fn test_render_shows_title_count_and_controls() {
        let store = setup();
        let buf = render(&store, &Header::new());

        assert!(buf.row_text(0).contains("The Atomic Blog"));
        let controls = buf.row_text(1);
        assert!(controls.contains("2 atomic posts found"));
        assert!(controls.contains(SEARCH_PLACEHOLDER));
        assert!(controls.contains(CLEAR_LABEL));
    }

    #[test]
    fn test_typing_in_search_sets_query() {
        let store = setup();
        let header = Header::new();
        let _cleanups = provide_posts(&store, || header.mount()).unwrap();

        focus::focus(ids::SEARCH);
        type_text("pixxel");
        route_keyboard_event(KeyboardEvent::new("Backspace"));
        route_keyboard_event(KeyboardEvent::new("Backspace"));
        route_keyboard_event(KeyboardEvent::new("Backspace"));
        type_text("el");

        assert_eq!(store.query(), "pixel");
        assert_eq!(store.visible_posts().len(), 1);

        let buf = render(&store, &header);
        assert!(buf.row_text(1).contains("1 atomic posts found"));
    }

    #[test]
    fn test_clear_button_empties_posts() {
        let store = setup();
        let header = Header::new();
        let _cleanups = provide_posts(&store, || header.mount()).unwrap();

        focus::focus(ids::CLEAR);
        // Typing is not an activation
        route_keyboard_event(KeyboardEvent::new("x"));
        assert_eq!(store.posts().len(), 2);

        route_keyboard_event(KeyboardEvent::new("Enter"));
        assert!(store.posts().is_empty());
    }

    #[test]
    fn test_mount_outside_scope_fails() {
        setup();
        assert!(Header::new().mount().is_err());
    }
}
