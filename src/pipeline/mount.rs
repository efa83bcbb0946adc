//! Mount API - Application lifecycle and render effect.
//!
//! This module provides the entry point for putting an [`App`] on the
//! terminal. It sets up the render effect that monitors the frame derived
//! and outputs to the terminal.
//!
//! # Example
//!
//! ```ignore
//! use atomic_blog::pipeline::mount;
//!
//! let handle = mount::mount(app)?;
//!
//! // Option 1: Run blocking event loop
//! mount::run(&handle)?;
//!
//! // Option 2: Tick manually in your own loop
//! while mount::tick(&handle)? {
//!     // Your logic here
//! }
//!
//! // Restore the terminal
//! handle.unmount()?;
//! ```

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use spark_signals::effect;
use tracing::{debug, info, warn};

use super::frame::create_frame_derived;
use super::terminal::{RawModeGuard, detect_terminal_size};
use crate::error::Result;
use crate::renderer::DiffRenderer;
use crate::state::{GlobalKeysHandle, input, setup_global_keys};
use crate::view::{App, AppHandle};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that allows unmounting.
///
/// Holds references to:
/// - The render effect stop function
/// - The running flag (set to false on Ctrl+C, Escape or stop())
/// - The global keys and app registrations (for cleanup)
/// - The renderer and raw mode guard (for terminal restore)
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    global_keys: Option<GlobalKeysHandle>,
    app: Option<AppHandle>,
    renderer: Option<Rc<RefCell<DiffRenderer>>>,
    raw_mode: Option<RawModeGuard>,
}

impl MountHandle {
    /// Stop rendering, drop all registrations and restore the terminal.
    pub fn unmount(mut self) -> io::Result<()> {
        self.restore()
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the application (sets running to false).
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Tear down in reverse mount order. Safe to call more than once.
    fn restore(&mut self) -> io::Result<()> {
        self.running.store(false, Ordering::SeqCst);

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        if let Some(handle) = self.global_keys.take() {
            handle.cleanup();
        }
        if let Some(app) = self.app.take() {
            app.unmount();
        }

        let screen = match self.renderer.take() {
            Some(renderer) => renderer.borrow_mut().exit_fullscreen(),
            None => Ok(()),
        };
        let raw = match self.raw_mode.take() {
            Some(guard) => guard.disable(),
            None => Ok(()),
        };
        debug!("terminal restored");
        screen.and(raw)
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(%err, "terminal restore failed");
        }
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the application.
///
/// This sets up:
/// 1. Terminal size detection
/// 2. Raw mode and the alternate screen
/// 3. The app's focus targets and key handlers (inside its post scope)
/// 4. Global key handlers (Ctrl+C/Escape to quit, Tab/Shift+Tab for focus)
/// 5. The ONE render effect (frame derived -> diff renderer)
///
/// If any step fails, everything already set up is torn down again.
pub fn mount(app: App) -> Result<MountHandle> {
    detect_terminal_size();

    let raw_mode = RawModeGuard::enable()?;
    let mut renderer = DiffRenderer::new();
    renderer.enter_fullscreen()?;

    let mut handle = MountHandle {
        stop_effect: None,
        running: Arc::new(AtomicBool::new(true)),
        global_keys: None,
        app: None,
        renderer: Some(Rc::new(RefCell::new(renderer))),
        raw_mode: Some(raw_mode),
    };

    handle.app = Some(app.mount()?);
    handle.global_keys = Some(setup_global_keys(handle.running.clone()));

    let frame = create_frame_derived(app);
    let running = handle.running.clone();
    let renderer = handle.renderer.clone();
    let mut last_size: Option<(u16, u16)> = None;

    let stop = effect(move || {
        if !running.load(Ordering::SeqCst) {
            return;
        }

        // Read from derived (creates dependency)
        let result = frame.get();

        let Some(renderer) = renderer.as_ref() else {
            return;
        };
        let mut renderer = renderer.borrow_mut();

        // Full repaint after a resize
        if last_size != Some(result.terminal_size) {
            renderer.invalidate();
            last_size = Some(result.terminal_size);
        }

        if let Err(err) = renderer.render(&result.buffer) {
            warn!(%err, "frame output failed");
        }
    });
    handle.stop_effect = Some(Box::new(stop));

    info!("mounted");
    Ok(handle)
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once.
///
/// Returns `Ok(false)` once the application should stop running.
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    // Poll with short timeout (~60fps)
    if let Some(event) = input::poll_event(Duration::from_millis(16))? {
        input::route_event(event);
    }

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
