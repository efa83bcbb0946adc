//! Focus System - Keyboard navigation and focus state
//!
//! Manages focus state and navigation:
//! - `FOCUSED` signal (id of the currently focused node)
//! - A registry of focusable nodes ordered by tab index
//! - Focus cycling (Tab/Shift+Tab) with wrap-around
//!
//! A focusable can be conditionally enabled (the archive list only takes
//! focus while the archive is shown). Disabled nodes are skipped by the
//! cycle, and if the focused node becomes disabled `focus_next` moves on.
//!
//! # Example
//!
//! ```ignore
//! use atomic_blog::state::focus;
//!
//! let cleanup = focus::register("search", 1, || true);
//! focus::focus_next();
//! assert!(focus::is_focused("search"));
//! cleanup();
//! ```

use std::cell::RefCell;

use spark_signals::{Signal, signal};
use tracing::trace;

/// Identifies a focusable node.
pub type FocusId = &'static str;

// =============================================================================
// FOCUSED SIGNAL
// =============================================================================

thread_local! {
    static FOCUSED: Signal<Option<FocusId>> = signal(None);
}

/// Get the currently focused node (None if nothing is focused)
pub fn focused() -> Option<FocusId> {
    FOCUSED.with(|s| s.get())
}

/// Check if any node is focused
pub fn has_focus() -> bool {
    focused().is_some()
}

/// Check if a specific node is focused
pub fn is_focused(id: FocusId) -> bool {
    focused() == Some(id)
}

fn set_focused(id: Option<FocusId>) {
    if focused() == id {
        return;
    }
    trace!(from = ?focused(), to = ?id, "focus moved");
    FOCUSED.with(|s| s.set(id));
}

// =============================================================================
// FOCUSABLE REGISTRY
// =============================================================================

struct Focusable {
    key: usize,
    id: FocusId,
    tab_index: i32,
    enabled: Box<dyn Fn() -> bool>,
}

struct FocusRegistry {
    entries: Vec<Focusable>,
    next_key: usize,
}

impl FocusRegistry {
    const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_key: 0,
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<FocusRegistry> = const { RefCell::new(FocusRegistry::new()) };
}

/// Register a focusable node.
///
/// Nodes cycle in `tab_index` order; equal indices keep registration order.
/// `enabled` is consulted on every navigation.
/// Returns cleanup function.
pub fn register<F>(id: FocusId, tab_index: i32, enabled: F) -> impl FnOnce()
where
    F: Fn() -> bool + 'static,
{
    let key = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let key = reg.next_key;
        reg.next_key += 1;
        reg.entries.push(Focusable {
            key,
            id,
            tab_index,
            enabled: Box::new(enabled),
        });
        key
    });

    move || {
        REGISTRY.with(|reg| reg.borrow_mut().entries.retain(|f| f.key != key));
        if is_focused(id) && !is_registered(id) {
            set_focused(None);
        }
    }
}

fn is_registered(id: FocusId) -> bool {
    REGISTRY.with(|reg| reg.borrow().entries.iter().any(|f| f.id == id))
}

/// All enabled focusable ids, in cycle order.
pub fn focusable_ids() -> Vec<FocusId> {
    REGISTRY.with(|reg| {
        let reg = reg.borrow();
        let mut enabled: Vec<&Focusable> = reg.entries.iter().filter(|f| (f.enabled)()).collect();
        // Stable sort: equal tab indices keep registration order
        enabled.sort_by_key(|f| f.tab_index);
        enabled.into_iter().map(|f| f.id).collect()
    })
}

// =============================================================================
// FOCUS NAVIGATION
// =============================================================================

fn find_next_focusable(from: Option<FocusId>, forward: bool) -> Option<FocusId> {
    let focusables = focusable_ids();
    if focusables.is_empty() {
        return None;
    }

    let current_pos = from.and_then(|id| focusables.iter().position(|f| *f == id));
    let len = focusables.len();

    let next = match current_pos {
        None if forward => 0,
        None => len - 1,
        Some(pos) if forward => (pos + 1) % len,
        Some(pos) => (pos + len - 1) % len,
    };
    Some(focusables[next])
}

/// Move focus to the next focusable node
pub fn focus_next() -> bool {
    let current = focused();
    match find_next_focusable(current, true) {
        Some(next) if Some(next) != current => {
            set_focused(Some(next));
            true
        }
        _ => false,
    }
}

/// Move focus to the previous focusable node
pub fn focus_previous() -> bool {
    let current = focused();
    match find_next_focusable(current, false) {
        Some(prev) if Some(prev) != current => {
            set_focused(Some(prev));
            true
        }
        _ => false,
    }
}

/// Focus a specific node. Fails if it is not registered or disabled.
pub fn focus(id: FocusId) -> bool {
    if focusable_ids().contains(&id) {
        set_focused(Some(id));
        true
    } else {
        false
    }
}

/// Clear focus (no node focused)
pub fn blur() {
    set_focused(None);
}

/// Drop focus from a node that has become disabled.
///
/// Called after state changes that can disable the focused node; focus
/// falls back to the previous node in the cycle.
pub fn revalidate() {
    let Some(id) = focused() else {
        return;
    };
    if !focusable_ids().contains(&id) {
        blur();
        focus_previous();
    }
}

// =============================================================================
// RESET (for testing)
// =============================================================================

/// Reset all focus state (for testing and remounting)
pub fn reset_focus_state() {
    REGISTRY.with(|reg| *reg.borrow_mut() = FocusRegistry::new());
    FOCUSED.with(|s| s.set(None));
}

// =============================================================================
// TESTS
// =============================================================================
