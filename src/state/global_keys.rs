//! Global Keys Module - Global keyboard shortcuts and routing priority
//!
//! Provides global key handlers for:
//! - Ctrl+C / Escape: Graceful shutdown
//! - Tab: Focus next node
//! - Shift+Tab: Focus previous node
//!
//! These handlers are registered on mount and cleaned up on unmount.
//!
//! [`route_keyboard_event`] is the single entry point for key events: the
//! focused node sees the event first, then key-specific and global handlers.
//! Ctrl+C is checked before the focused node so a text field can never
//! swallow it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use super::focus;
use super::keyboard::{self, KeyboardEvent};

// =============================================================================
// GLOBAL KEYS HANDLE
// =============================================================================

/// Cleanup handle for global key handlers
pub struct GlobalKeysHandle {
    quit_cleanup: Option<Box<dyn FnOnce()>>,
    tab_cleanup: Option<Box<dyn FnOnce()>>,
    shift_tab_cleanup: Option<Box<dyn FnOnce()>>,
}

impl GlobalKeysHandle {
    /// Clean up all global key handlers
    pub fn cleanup(mut self) {
        for cleanup in [
            self.quit_cleanup.take(),
            self.tab_cleanup.take(),
            self.shift_tab_cleanup.take(),
        ]
        .into_iter()
        .flatten()
        {
            cleanup();
        }
    }
}

// =============================================================================
// SETUP FUNCTIONS
// =============================================================================

fn is_quit(event: &KeyboardEvent) -> bool {
    (event.modifiers.ctrl && event.key == "c") || event.key == "Escape"
}

/// Set up global key handlers.
/// Returns a handle for cleanup.
///
/// # Handlers
///
/// - **Ctrl+C / Escape**: Sets `running` to false for graceful shutdown
/// - **Tab**: Calls `focus::focus_next()`
/// - **Shift+Tab**: Calls `focus::focus_previous()`
pub fn setup_global_keys(running: Arc<AtomicBool>) -> GlobalKeysHandle {
    let quit_cleanup = keyboard::on(move |event| {
        if is_quit(event) {
            info!(key = %event.key, "quit requested");
            running.store(false, Ordering::SeqCst);
            true
        } else {
            false
        }
    });

    // Registered before Tab so the shift check wins
    let shift_tab_cleanup = keyboard::on(|event| {
        if event.key == "Tab" && event.modifiers.shift {
            focus::focus_previous();
            true
        } else {
            false
        }
    });

    let tab_cleanup = keyboard::on(|event| {
        if event.key == "Tab" && !event.modifiers.shift {
            focus::focus_next();
            true
        } else {
            false
        }
    });

    GlobalKeysHandle {
        quit_cleanup: Some(Box::new(quit_cleanup)),
        tab_cleanup: Some(Box::new(tab_cleanup)),
        shift_tab_cleanup: Some(Box::new(shift_tab_cleanup)),
    }
}

// =============================================================================
// ROUTING
// =============================================================================

/// Route a key event through focused, key-specific and global handlers.
/// Returns true if any handler consumed the event.
pub fn route_keyboard_event(event: KeyboardEvent) -> bool {
    keyboard::update_last_event(event.clone());

    if !event.is_press() {
        return false;
    }

    let ctrl_c = event.modifiers.ctrl && event.key == "c";
    if !ctrl_c && keyboard::dispatch_focused(focus::focused(), &event) {
        return true;
    }

    keyboard::dispatch_to_handlers(&event)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::{Modifiers, reset_keyboard_state};

    fn setup() {
        reset_focus_state();
        reset_keyboard_state();
    }

    #[test]
    fn test_ctrl_c_sets_running_false() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());

        route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(!running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_escape_sets_running_false() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());

        route_keyboard_event(KeyboardEvent::new("Escape"));
        assert!(!running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_regular_c_does_not_stop() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());

        route_keyboard_event(KeyboardEvent::new("c"));
        assert!(running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_cleanup_removes_handlers() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());
        handle.cleanup();

        route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_tab_and_shift_tab_move_focus() {
        setup();
        let _a = focus::register("a", 0, || true);
        let _b = focus::register("b", 1, || true);
        focus::focus("a");

        let handle = setup_global_keys(Arc::new(AtomicBool::new(true)));

        route_keyboard_event(KeyboardEvent::new("Tab"));
        assert_eq!(focus::focused(), Some("b"));

        route_keyboard_event(KeyboardEvent::with_modifiers("Tab", Modifiers::shift()));
        assert_eq!(focus::focused(), Some("a"));

        handle.cleanup();
    }

    #[test]
    fn test_focused_handler_runs_before_global() {
        setup();
        let _field = focus::register("field", 0, || true);
        focus::focus("field");

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());
        let _typing = keyboard::on_focused("field", |event| event.key == "Escape");

        // The focused node consumes Escape, so the app keeps running
        assert!(route_keyboard_event(KeyboardEvent::new("Escape")));
        assert!(running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_ctrl_c_bypasses_focused_handler() {
        setup();
        let _field = focus::register("field", 0, || true);
        focus::focus("field");

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());
        let _typing = keyboard::on_focused("field", |_| true);

        route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(!running.load(Ordering::SeqCst));

        handle.cleanup();
    }
}
