//! Frame Derived - Reactive frame computation.
//!
//! Creates a Derived that renders the whole view tree into a FrameBuffer.
//! Everything the tree reads while rendering (terminal size, the store's
//! posts and query, local component signals, focus) becomes a dependency,
//! so any change to them produces a new frame.

use spark_signals::{Derived, derived};

use super::terminal::{terminal_height_signal, terminal_width_signal};
use crate::renderer::FrameBuffer;
use crate::view::App;

// =============================================================================
// Types
// =============================================================================

/// Result of frame computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    /// The rendered frame buffer.
    pub buffer: FrameBuffer,
    /// Terminal size at time of render.
    pub terminal_size: (u16, u16),
}

// =============================================================================
// Frame Derived Factory
// =============================================================================

/// Render `app` into a fresh `width` x `height` frame.
pub fn render_frame(app: &App, width: u16, height: u16) -> FrameResult {
    let mut buffer = FrameBuffer::new(width, height);
    app.render(&mut buffer);
    FrameResult {
        buffer,
        terminal_size: (width, height),
    }
}

/// Create the frame derived for `app`.
pub fn create_frame_derived(app: App) -> Derived<FrameResult> {
    let tw_signal = terminal_width_signal();
    let th_signal = terminal_height_signal();

    derived(move || {
        let tw = tw_signal.get();
        let th = th_signal.get();
        render_frame(&app, tw, th)
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PostStore;
    use crate::pipeline::terminal::set_terminal_size;
    use crate::post::Post;
    use crate::view::Archive;
    use std::rc::Rc;

    fn app() -> App {
        let store = PostStore::with_posts(Rc::new(vec![
            Post::new("Neural Port", "Hack the bus!"),
            Post::new("Mobile Pixel", "Parse the feed!"),
        ]));
        App::with_store(store, Archive::new(10, Some(1)), false)
    }

    #[test]
    fn test_frame_matches_terminal_size() {
        set_terminal_size(80, 24);
        let frame: Derived<FrameResult> = create_frame_derived(app());

        let result = frame.get();
        assert_eq!(result.terminal_size, (80, 24));
        assert_eq!(result.buffer.width(), 80);
        assert_eq!(result.buffer.height(), 24);

        set_terminal_size(100, 30);
        assert_eq!(frame.get().terminal_size, (100, 30));
    }

    #[test]
    fn test_frame_follows_store() {
        set_terminal_size(100, 30);
        let app = app();
        let store = app.store().clone();
        let frame = create_frame_derived(app);

        assert!(frame.get().buffer.find_row("2 atomic posts found").is_some());

        store.add_post(Post::new("foo", "bar baz"));
        assert!(frame.get().buffer.find_row("3 atomic posts found").is_some());

        store.set_query("pixel");
        assert!(frame.get().buffer.find_row("1 atomic posts found").is_some());

        store.clear_posts();
        assert!(frame.get().buffer.find_row("0 atomic posts found").is_some());
    }

    #[test]
    fn test_frame_follows_theme() {
        set_terminal_size(60, 20);
        let app = app();
        let toggle = app.theme_toggle().clone();
        let frame = create_frame_derived(app);

        let light = frame.get();
        toggle.toggle();
        let dark = frame.get();

        assert_ne!(light.buffer, dark.buffer);
        let theme = crate::theme::dark();
        assert_eq!(dark.buffer.get(0, 1).map(|c| c.bg), Some(theme.background));
    }
}
