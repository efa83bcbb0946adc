//! View Tree - the components of the blog screen.
//!
//! ```text
//! App ── ThemeToggle
//!  ├── Header ── Results, SearchPosts, ClearPosts
//!  ├── Main ──── FormAddPost, PostList
//!  ├── Archive
//!  └── Footer
//! ```
//!
//! Every component follows the same two-phase shape:
//!
//! - `mount` runs once inside the post scope. It registers focus targets and
//!   key handlers, capturing the store handle from [`use_posts`] so the
//!   handlers can mutate it later.
//! - `render` runs inside the post scope on every frame. It reads the store
//!   and its own local signals and draws into the frame buffer.
//!
//! Components hold only local state (form fields, scroll positions,
//! visibility flags). Posts and the query live in the store.
//!
//! [`use_posts`]: crate::context::use_posts

pub mod app;
pub mod archive;
pub mod footer;
pub mod header;
pub mod main_panel;
pub mod widgets;

pub use app::{App, AppHandle, ThemeToggle};
pub use archive::Archive;
pub use footer::Footer;
pub use header::{ClearPosts, Header, Results, SearchPosts};
pub use main_panel::{FormAddPost, Main, PostList};

use crate::error::Result;
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::Rect;

/// Cleanup function returned by registrations.
pub type Cleanup = Box<dyn FnOnce()>;

/// Focus ids of every focusable node, in Tab order.
pub mod ids {
    use crate::state::FocusId;

    pub const DARK_TOGGLE: FocusId = "dark-toggle";
    pub const SEARCH: FocusId = "search";
    pub const CLEAR: FocusId = "clear";
    pub const TITLE: FocusId = "post-title";
    pub const BODY: FocusId = "post-body";
    pub const ADD: FocusId = "add-post";
    pub const POST_LIST: FocusId = "post-list";
    pub const ARCHIVE_TOGGLE: FocusId = "archive-toggle";
    pub const ARCHIVE_LIST: FocusId = "archive-list";

    /// Tab order.
    pub const ORDER: [FocusId; 9] = [
        DARK_TOGGLE,
        SEARCH,
        CLEAR,
        TITLE,
        BODY,
        ADD,
        POST_LIST,
        ARCHIVE_TOGGLE,
        ARCHIVE_LIST,
    ];

    /// Tab index of `id` (its position in [`ORDER`]).
    pub fn tab_index(id: FocusId) -> i32 {
        ORDER.iter().position(|o| *o == id).map_or(i32::MAX, |p| p as i32)
    }
}

/// A node of the view tree.
pub trait Component {
    /// Register focus targets and key handlers.
    ///
    /// Called inside the post scope; fails with `ContextUnavailable` outside.
    fn mount(&self) -> Result<Vec<Cleanup>> {
        Ok(Vec::new())
    }

    /// Draw into `area` of the frame.
    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()>;
}

/// Register `id` as always focusable, boxing the cleanup.
pub(crate) fn focusable(id: crate::state::FocusId) -> Cleanup {
    let cleanup = crate::state::focus::register(id, ids::tab_index(id), || true);
    Box::new(cleanup)
}

/// Register a focused-key handler, boxing the cleanup.
pub(crate) fn on_focused<F>(id: crate::state::FocusId, handler: F) -> Cleanup
where
    F: Fn(&crate::state::KeyboardEvent) -> bool + 'static,
{
    Box::new(crate::state::keyboard::on_focused(id, handler))
}
