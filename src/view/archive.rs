//! Archive panel: a large pool of generated posts that can be copied into
//! the main list one at a time.
//!
//! The archive is generated on the panel's first render and kept for the
//! panel's lifetime. It is independent of the store: nothing here is ever
//! cleared, and adding an entry copies it into the canonical collection.

use std::cell::{Cell, OnceCell};
use std::rc::Rc;

use spark_signals::{Signal, signal};
use tracing::{debug, info};

use super::widgets::{button_width, draw_button, navigate};
use super::{Cleanup, Component, focusable, ids, on_focused};
use crate::context::{PostStore, use_posts};
use crate::error::Result;
use crate::layout::truncate_text;
use crate::post::{Post, PostGenerator, Posts};
use crate::renderer::FrameBuffer;
use crate::state::focus;
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect, Style};

pub const HEADING: &str = "Post archive";
pub const SHOW_LABEL: &str = "Show archive posts";
pub const HIDE_LABEL: &str = "Hide archive posts";
pub const ADD_LABEL: &str = "Add as new post";

/// Mixed into a configured seed so the archive differs from the initial posts.
const ARCHIVE_SEED_SALT: u64 = 0x00A7_C41E;

/// Rows above the list inside the border (heading, toggle, gap).
const LIST_TOP: u16 = 3;

#[derive(Clone)]
pub struct Archive {
    posts: Rc<OnceCell<Posts>>,
    size: usize,
    seed: Option<u64>,
    show: Signal<bool>,
    selected: Signal<usize>,
    /// Entries that fit on screen, as of the last render.
    page: Rc<Cell<usize>>,
}

impl Archive {
    /// An archive of `size` posts, hidden, not yet generated.
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        Self {
            posts: Rc::new(OnceCell::new()),
            size,
            seed,
            show: signal(false),
            selected: signal(0),
            page: Rc::new(Cell::new(1)),
        }
    }

    /// The archive entries, generated on first call.
    pub fn posts(&self) -> Posts {
        Rc::clone(self.posts.get_or_init(|| {
            let seed = self.seed.map(|s| s ^ ARCHIVE_SEED_SALT);
            let mut generator = PostGenerator::from_seed_option(seed);
            let posts = generator.generate_many(self.size);
            info!(count = posts.len(), "archive generated");
            posts
        }))
    }

    /// Check whether the entries exist yet.
    pub fn is_generated(&self) -> bool {
        self.posts.get().is_some()
    }

    pub fn is_shown(&self) -> bool {
        self.show.get()
    }

    /// Flip visibility. Focus leaves the list if it is being hidden.
    pub fn toggle(&self) {
        let shown = !self.show.get();
        debug!(shown, "archive visibility toggled");
        self.show.set(shown);
        focus::revalidate();
    }

    /// Index of the entry under the cursor.
    pub fn selected(&self) -> usize {
        self.selected.get()
    }

    /// Move the cursor, clamped to the archive.
    pub fn select(&self, index: usize) {
        let last = self.posts().len().saturating_sub(1);
        self.selected.set(index.min(last));
    }

    /// Copy entry `index` into `store`. Returns the added post.
    pub fn add_entry(&self, index: usize, store: &PostStore) -> Option<Post> {
        let post = self.posts().get(index).cloned()?;
        debug!(index, title = %post.title, "archive entry added as new post");
        store.add_post(post.clone());
        Some(post)
    }

    /// Copy the entry under the cursor into `store`.
    pub fn add_selected(&self, store: &PostStore) -> Option<Post> {
        self.add_entry(self.selected.get(), store)
    }

    fn toggle_label(&self) -> &'static str {
        if self.is_shown() {
            HIDE_LABEL
        } else {
            SHOW_LABEL
        }
    }

    fn render_list(&self, buf: &mut FrameBuffer, area: Rect, posts: &Posts, theme: &Theme) {
        if area.is_empty() || posts.is_empty() {
            return;
        }

        let page = usize::from(area.height);
        self.page.set(page);
        let selected = self.selected.get().min(posts.len() - 1);
        let first = selected / page * page;
        let focused = focus::is_focused(ids::ARCHIVE_LIST);

        for (slot, post) in posts.iter().enumerate().skip(first).take(page) {
            let row = area.row((slot - first) as u16);
            let is_selected = slot == selected;

            let style = match (is_selected, focused) {
                (true, true) => theme.selection_style(),
                (true, false) => Style::fg(theme.text).attrs(Attr::BOLD),
                _ => theme.text_style(),
            };
            if is_selected && focused {
                for col in row.x..row.right() {
                    buf.set_cell(col, row.y, ' ', style, row);
                }
            }

            let button = if is_selected && focused {
                button_width(ADD_LABEL) + 1
            } else {
                0
            };
            let text = truncate_text(&post.to_string(), row.width.saturating_sub(button + 1));
            buf.draw_text(row.x + 1, row.y, &text, style, row);

            if button > 0 && row.width > button {
                let x = row.right() - button;
                draw_button(buf, x, row.y, ADD_LABEL, true, theme, row);
            }
        }
    }
}

impl Component for Archive {
    fn mount(&self) -> Result<Vec<Cleanup>> {
        let store = use_posts()?;
        let toggle = self.clone();
        let list = self.clone();
        let shown = self.show.clone();

        Ok(vec![
            focusable(ids::ARCHIVE_TOGGLE),
            Box::new(focus::register(
                ids::ARCHIVE_LIST,
                ids::tab_index(ids::ARCHIVE_LIST),
                move || shown.get(),
            )),
            on_focused(ids::ARCHIVE_TOGGLE, move |event| {
                if !event.is_activate() {
                    return false;
                }
                toggle.toggle();
                true
            }),
            on_focused(ids::ARCHIVE_LIST, move |event| {
                if event.is_activate() {
                    list.add_selected(&store);
                    return true;
                }
                let len = list.posts().len();
                match navigate(event, list.selected.get(), len, list.page.get()) {
                    Some(next) => {
                        list.selected.set(next);
                        true
                    }
                    None => false,
                }
            }),
        ])
    }

    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        let posts = self.posts();
        if area.is_empty() {
            return Ok(());
        }

        let focused =
            focus::is_focused(ids::ARCHIVE_TOGGLE) || focus::is_focused(ids::ARCHIVE_LIST);
        buf.draw_border(
            area,
            BorderStyle::Rounded,
            theme.border_color(focused),
            area,
        );
        let inner = area.inset(1);
        if inner.is_empty() {
            return Ok(());
        }

        let heading = inner.row(0);
        buf.draw_text(
            heading.x + 1,
            heading.y,
            HEADING,
            theme.heading_style(),
            heading,
        );

        let toggle_row = inner.row(1);
        if !toggle_row.is_empty() {
            let toggle_focused = focus::is_focused(ids::ARCHIVE_TOGGLE);
            draw_button(
                buf,
                toggle_row.x + 1,
                toggle_row.y,
                self.toggle_label(),
                toggle_focused,
                theme,
                toggle_row,
            );
        }

        if self.is_shown() {
            let (_, list_area) = inner.split_top(LIST_TOP);
            self.render_list(buf, list_area, &posts, theme);
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
