//! App root: owns the store, provides it to the tree, and lays out the
//! top-level components.

use spark_signals::{Signal, signal};
use tracing::{debug, error, info};

use super::widgets::{button_width, draw_button};
use super::{Archive, Cleanup, Component, Footer, Header, Main, focusable, ids, on_focused};
use crate::config::Config;
use crate::context::{PostStore, provide_posts};
use crate::error::{Error, Result};
use crate::layout::ScreenLayout;
use crate::post::PostGenerator;
use crate::renderer::FrameBuffer;
use crate::state::focus;
use crate::theme::Theme;
use crate::types::{Rect, Style};

/// Shown while in light mode (press to go dark).
pub const LIGHT_ICON: &str = "🌙";
/// Shown while in dark mode (press to go light).
pub const DARK_ICON: &str = "☀️";

// =============================================================================
// ThemeToggle
// =============================================================================

/// Dark-mode switch. Purely presentational: flips the theme, never the store.
#[derive(Clone)]
pub struct ThemeToggle {
    dark: Signal<bool>,
}

impl ThemeToggle {
    pub fn new(dark: bool) -> Self {
        Self { dark: signal(dark) }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn toggle(&self) {
        let dark = !self.dark.get();
        debug!(dark, "theme toggled");
        self.dark.set(dark);
    }

    pub fn icon(&self) -> &'static str {
        if self.is_dark() {
            DARK_ICON
        } else {
            LIGHT_ICON
        }
    }
}

impl Component for ThemeToggle {
    fn mount(&self) -> Result<Vec<Cleanup>> {
        let toggle = self.clone();
        Ok(vec![
            focusable(ids::DARK_TOGGLE),
            on_focused(ids::DARK_TOGGLE, move |event| {
                if !event.is_activate() {
                    return false;
                }
                toggle.toggle();
                true
            }),
        ])
    }

    /// Draws at the right end of `area`'s first row.
    fn render(&self, buf: &mut FrameBuffer, area: Rect, theme: &Theme) -> Result<()> {
        let icon = self.icon();
        let width = button_width(icon);
        if area.width <= width {
            return Ok(());
        }
        let x = area.right() - width - 1;
        draw_button(
            buf,
            x,
            area.y,
            icon,
            focus::is_focused(ids::DARK_TOGGLE),
            theme,
            area,
        );
        Ok(())
    }
}

// =============================================================================
// App
// =============================================================================

/// Root of the view tree.
#[derive(Clone)]
pub struct App {
    store: PostStore,
    toggle: ThemeToggle,
    header: Header,
    main: Main,
    archive: Archive,
    footer: Footer,
}

impl App {
    /// Build the app from configuration: generates the initial posts.
    pub fn new(config: &Config) -> Self {
        let mut generator = PostGenerator::from_seed_option(config.seed);
        let store = PostStore::initialize(&mut generator, config.initial_posts);
        Self::with_store(
            store,
            Archive::new(config.archive_size, config.seed),
            config.dark,
        )
    }

    /// Build the app around an existing store.
    pub fn with_store(store: PostStore, archive: Archive, dark: bool) -> Self {
        Self {
            store,
            toggle: ThemeToggle::new(dark),
            header: Header::new(),
            main: Main::new(),
            archive,
            footer: Footer,
        }
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn theme_toggle(&self) -> &ThemeToggle {
        &self.toggle
    }

    pub fn main(&self) -> &Main {
        &self.main
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Current palette, from the dark-mode flag.
    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.toggle.is_dark())
    }

    /// Register every component's focus targets and key handlers, then
    /// focus the search field.
    pub fn mount(&self) -> Result<AppHandle> {
        let cleanups = provide_posts(&self.store, || -> Result<Vec<Cleanup>> {
            let mut cleanups = self.toggle.mount()?;
            cleanups.extend(self.header.mount()?);
            cleanups.extend(self.main.mount()?);
            cleanups.extend(self.archive.mount()?);
            cleanups.extend(self.footer.mount()?);
            Ok(cleanups)
        })?;

        focus::focus(ids::SEARCH);
        info!(handlers = cleanups.len(), "app mounted");
        Ok(AppHandle { cleanups })
    }

    /// Render the whole tree into `buf`.
    ///
    /// A failing component replaces the frame with the error line.
    pub fn render(&self, buf: &mut FrameBuffer) {
        let theme = self.theme();
        let bounds = buf.bounds();
        buf.fill_rect(bounds, theme.background);

        if let Err(err) = provide_posts(&self.store, || self.render_tree(buf, &theme)) {
            error!(%err, "render failed");
            render_error(buf, &err, &theme);
        }
    }

    fn render_tree(&self, buf: &mut FrameBuffer, theme: &Theme) -> Result<()> {
        let layout = ScreenLayout::compute(buf.bounds());

        self.header.render(buf, layout.header, theme)?;
        self.toggle.render(buf, layout.header.row(0), theme)?;
        self.main.render(buf, layout.main, theme)?;
        self.archive.render(buf, layout.archive, theme)?;
        self.footer.render(buf, layout.footer, theme)
    }
}

/// Clear the frame and draw only `err`.
pub fn render_error(buf: &mut FrameBuffer, err: &Error, theme: &Theme) {
    let bounds = buf.bounds();
    buf.fill_rect(bounds, theme.background);
    let message = format!("error: {err}");
    buf.draw_text(1, 0, &message, Style::fg(theme.error), bounds);
}

// =============================================================================
// AppHandle
// =============================================================================

/// Registrations made by [`App::mount`]. Dropping it unregisters them.
pub struct AppHandle {
    cleanups: Vec<Cleanup>,
}

impl AppHandle {
    /// Unregister all focus targets and key handlers.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for AppHandle {
    fn drop(&mut self) {
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
