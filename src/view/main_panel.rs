//! Main panel: the add-post form above the scrollable list of visible posts.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{Signal, signal};
use tracing::debug;

use super::widgets::{draw_button, draw_field, edit_text, navigate};
use super::{Cleanup, Component, focusable, ids, on_focused};
use crate::context::{PostStore, use_posts};
use crate::error::Result;
use crate::layout::truncate_text;
use crate::post::Post;
use crate::renderer::FrameBuffer;
use crate::state::{KeyboardEvent, focus};
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect, Style};

pub const TITLE_PLACEHOLDER: &str = "Post title";
pub const BODY_PLACEHOLDER: &str = "Post body";
pub const ADD_LABEL: &str = "Add post";

/// Rows the form occupies, including the gap below it.
const FORM_ROWS: u16 = 4;

/// Rows each post takes in the list (title, body).
const ROWS_PER_POST: u16 = 2;

// =============================================================================
// FormAddPost
// =============================================================================

/// Title and body fields plus the submit button.
///
/// The field contents are local to the form; only a successful submit
/// touches the store.
#[derive(Clone)]
pub struct FormAddPost {
    title: Signal<String>,
    body: Signal<String>,
}

impl FormAddPost {
    pub fn new() -> Self {
        Self {
            title: signal(String::new()),
            body: signal(String::new()),
        }
    }

    pub fn title(&self) -> String {
        self.title.get()
    }

    pub fn body(&self) -> String {
        self.body.get()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.title.set(title.into());
    }

    pub fn set_body(&self, body: impl Into<String>) {
        self.body.set(body.into());
    }

    /// Add the entered post to `store` and reset both fields.
    ///
    /// Does nothing unless both fields are non-empty. Whitespace counts as
    /// content. Returns true if a post was added.
    pub fn submit(&self, store: &PostStore) -> bool {
        let title = self.title.get();
        let body = self.body.get();
        if title.is_empty() || body.is_empty() {
            debug!(
                has_title = !title.is_empty(),
                has_body = !body.is_empty(),
                "incomplete post ignored"
            );
            return false;
        }

        store.add_post(Post::new(title, body));
        self.title.set(String::new());
        self.body.set(String::new());
        true
    }

    /// Key handler for one of the two fields: typing edits, Enter submits.
    fn field_handler(
        form: FormAddPost,
        field: Signal<String>,
        store: PostStore,
    ) -> impl Fn(&KeyboardEvent) -> bool + 'static {
        move |event| {
            if event.key == "Enter" {
                form.submit(&store);
                return true;
            }
            match edit_text(&field.get(), event) {
                Some(value) => {
                    field.set(value);
                    true
                }
                None => false,
            }
        }
    }
}

impl Default for FormAddPost {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FormAddPost {
    fn mount(&self) -> Result<Vec<Cleanup>> {
        let store = use_posts()?;
        let form = self.clone();
        let add_store = store.clone();

        Ok(vec![
            focusable(ids::TITLE),
            focusable(ids::BODY),
            focusable(ids::ADD),
            on_focused(
                ids::TITLE,
                Self::field_handler(self.clone(), self.title.clone(), store.clone()),
            ),
            on_focused(
                ids::BODY,
                Self::field_handler(self.clone(), self.body.clone(), store),
            ),
            on_focused(ids::ADD, move |event| {
                if !event.is_activate() {
                    return false;
                }
                form.submit(&add_store);
                true
            }),
        ])
    }

    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        let field_width = area.width.saturating_sub(2);

        let title_row = area.row(0);
        draw_field(
            buf,
            Rect::new(title_row.x + 1, title_row.y, field_width, title_row.height),
            &self.title.get(),
            TITLE_PLACEHOLDER,
            focus::is_focused(ids::TITLE),
            theme,
        );

        let body_row = area.row(1);
        draw_field(
            buf,
            Rect::new(body_row.x + 1, body_row.y, field_width, body_row.height),
            &self.body.get(),
            BODY_PLACEHOLDER,
            focus::is_focused(ids::BODY),
            theme,
        );

        let button_row = area.row(2);
        if !button_row.is_empty() {
            let focused = focus::is_focused(ids::ADD);
            draw_button(
                buf,
                button_row.x + 1,
                button_row.y,
                ADD_LABEL,
                focused,
                theme,
                button_row,
            );
        }
        Ok(())
    }
}

// =============================================================================
// PostList
// =============================================================================

/// Scrollable list of the visible posts, two rows per post.
#[derive(Clone)]
pub struct PostList {
    /// Index of the first post on screen.
    first: Signal<usize>,
    /// Posts that fit on screen, as of the last render.
    page: Rc<Cell<usize>>,
}

impl PostList {
    pub fn new() -> Self {
        Self {
            first: signal(0),
            page: Rc::new(Cell::new(1)),
        }
    }

    /// Index of the first post on screen, before clamping to the list.
    pub fn first(&self) -> usize {
        self.first.get()
    }

    fn max_first(len: usize, page: usize) -> usize {
        len.saturating_sub(page.max(1))
    }
}

impl Default for PostList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PostList {
    fn mount(&self) -> Result<Vec<Cleanup>> {
        let store = use_posts()?;
        let list = self.clone();

        Ok(vec![
            focusable(ids::POST_LIST),
            on_focused(ids::POST_LIST, move |event| {
                let len = store.visible_posts().len();
                let page = list.page.get();
                let current = list.first.get().min(Self::max_first(len, page));
                match navigate(event, current, len, page) {
                    Some(next) => {
                        list.first.set(next.min(Self::max_first(len, page)));
                        true
                    }
                    None => false,
                }
            }),
        ])
    }

    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        let posts = use_posts()?.visible_posts();
        let focused = focus::is_focused(ids::POST_LIST);

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

        let page = usize::from(inner.height / ROWS_PER_POST).max(1);
        self.page.set(page);
        let first = self.first.get().min(Self::max_first(posts.len(), page));

        let title_style = Style::fg(theme.primary).attrs(Attr::BOLD);
        let text_width = inner.width.saturating_sub(2);
        for (slot, post) in posts.iter().skip(first).take(page).enumerate() {
            let y = inner.y + slot as u16 * ROWS_PER_POST;
            let title = truncate_text(&post.title, text_width);
            buf.draw_text(inner.x + 1, y, &title, title_style, inner);
            let body = truncate_text(&post.body, text_width);
            buf.draw_text(inner.x + 1, y + 1, &body, theme.text_style(), inner);
        }

        if posts.len() > page {
            let last = (first + page).min(posts.len());
            let position = format!(" {}-{} of {} ", first + 1, last, posts.len());
            let label_row = Rect::new(
                area.x + 1,
                area.bottom() - 1,
                area.width.saturating_sub(2),
                1,
            );
            buf.draw_text_right(label_row, &position, theme.muted_style());
        }
        Ok(())
    }
}

// =============================================================================
// Main
// =============================================================================

/// Left column of the body: form on top, list below.
#[derive(Clone, Default)]
pub struct Main {
    form: FormAddPost,
    list: PostList,
}

impl Main {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormAddPost {
        &self.form
    }

    pub fn list(&self) -> &PostList {
        &self.list
    }
}

impl Component for Main {
    fn mount(&self) -> Result<Vec<Cleanup>> {
        let mut cleanups = self.form.mount()?;
        cleanups.extend(self.list.mount()?);
        Ok(cleanups)
    }

    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        let (form_area, list_area) = area.split_top(FORM_ROWS);
        self.form.render(buf, form_area, theme)?;
        self.list.render(buf, list_area, theme)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::provide_posts;
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::reset_keyboard_state;
    use crate::state::route_keyboard_event;

    fn setup(count: usize) -> PostStore {
        reset_focus_state();
        reset_keyboard_state();
        let posts = (0..count)
            .map(|i| Post::new(format!("title {i}"), format!("body {i}")))
            .collect();
        PostStore::with_posts(Rc::new(posts))
    }

    fn render(
        store: &PostStore,
        component: &impl Component,
        width: u16,
        height: u16,
    ) -> FrameBuffer {
        let mut buf = FrameBuffer::new(width, height);
        let area = buf.bounds();
        provide_posts(store, || component.render(&mut buf, area, &Theme::default())).unwrap();
        buf
    }

    fn press(key: &str) {
        route_keyboard_event(KeyboardEvent::new(key));
    }

    fn type_text(text: &str) {
        for ch in text.chars() {
            press(&ch.to_string());
        }
    }

    #[test]
    fn test_submit_appends_and_clears_fields() {
        let store = setup(0);
        let form = FormAddPost::new();
        form.set_title("foo");
        form.set_body("bar baz");

        assert!(form.submit(&store));

        assert_eq!(store.posts().as_slice(), &[Post::new("foo", "bar baz")]);
        assert_eq!(form.title(), "");
        assert_eq!(form.body(), "");
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let store = setup(0);
        let form = FormAddPost::new();

        form.set_title("only title");
        assert!(!form.submit(&store));
        assert_eq!(form.title(), "only title");

        form.set_title("");
        form.set_body("only body");
        assert!(!form.submit(&store));

        assert!(store.posts().is_empty());
    }

    #[test]
    fn test_submit_accepts_whitespace() {
        let store = setup(0);
        let form = FormAddPost::new();
        form.set_title(" ");
        form.set_body("\t");

        assert!(form.submit(&store));
        assert_eq!(store.posts()[0], Post::new(" ", "\t"));
    }

    #[test]
    fn test_keyboard_form_flow() {
        let store = setup(2);
        let main = Main::new();
        let _cleanups = provide_posts(&store, || main.mount()).unwrap();

        focus::focus(ids::TITLE);
        type_text("foo");
        focus::focus(ids::BODY);
        type_text("bar baz");
        focus::focus(ids::ADD);
        press("Enter");

        assert_eq!(store.posts().len(), 3);
        assert_eq!(store.posts().last(), Some(&Post::new("foo", "bar baz")));
        assert_eq!(main.form().title(), "");
    }

    #[test]
    fn test_enter_in_field_submits() {
        let store = setup(0);
        let main = Main::new();
        let _cleanups = provide_posts(&store, || main.mount()).unwrap();

        focus::focus(ids::TITLE);
        type_text("t");
        // Body still empty: nothing happens, but Enter is consumed
        press("Enter");
        assert!(store.posts().is_empty());

        focus::focus(ids::BODY);
        type_text("b");
        press("Enter");
        assert_eq!(store.posts().as_slice(), &[Post::new("t", "b")]);
    }

    #[test]
    fn test_form_render_placeholders() {
        let store = setup(0);
        let buf = render(&store, &FormAddPost::new(), 40, 3);

        assert!(buf.row_text(0).contains(TITLE_PLACEHOLDER));
        assert!(buf.row_text(1).contains(BODY_PLACEHOLDER));
        assert!(buf.row_text(2).contains(ADD_LABEL));
    }

    #[test]
    fn test_list_renders_visible_posts_in_order() {
        let store = setup(3);
        store.set_query("title 1");

        let buf = render(&store, &PostList::new(), 40, 10);

        assert!(buf.find_row("title 1").is_some());
        assert!(buf.find_row("body 1").is_some());
        assert!(buf.find_row("title 0").is_none());
        assert!(buf.find_row("title 2").is_none());
    }

    #[test]
    fn test_list_scrolls_and_clamps() {
        let store = setup(10);
        let list = PostList::new();
        let _cleanups = provide_posts(&store, || list.mount()).unwrap();

        // 8 inner rows: 4 posts per page
        let buf = render(&store, &list, 40, 10);
        assert!(buf.find_row("1-4 of 10").is_some());

        focus::focus(ids::POST_LIST);
        press("ArrowDown");
        assert_eq!(list.first(), 1);

        press("End");
        assert_eq!(list.first(), 6);
        let buf = render(&store, &list, 40, 10);
        assert!(buf.find_row("title 9").is_some());
        assert!(buf.find_row("7-10 of 10").is_some());

        press("PageUp");
        assert_eq!(list.first(), 2);
        press("Home");
        assert_eq!(list.first(), 0);
    }

    #[test]
    fn test_main_render_has_form_and_list() {
        let store = setup(1);
        let buf = render(&store, &Main::new(), 50, 12);

        assert_eq!(buf.find_row(TITLE_PLACEHOLDER), Some(0));
        assert!(buf.find_row("title 0").is_some());
    }
}
