//! Post context - scope-wide lookup of the shared store.
//!
//! The root of the view tree wraps its render in [`provide_posts`]; any
//! component rendered inside that call can reach the store with
//! [`use_posts`] instead of having it threaded through every constructor.
//!
//! Scopes nest like the parent stack in a component tree: the innermost
//! provider wins, and leaving a scope restores the outer one.

use std::cell::RefCell;

use super::store::PostStore;
use crate::error::{Error, Result};

thread_local! {
    static CONTEXT_STACK: RefCell<Vec<PostStore>> = const { RefCell::new(Vec::new()) };
}

/// Pops the scope on drop so a panicking render cannot leak it.
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        CONTEXT_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Run `f` with `store` available to [`use_posts`].
pub fn provide_posts<R>(store: &PostStore, f: impl FnOnce() -> R) -> R {
    CONTEXT_STACK.with(|stack| stack.borrow_mut().push(store.clone()));
    let _guard = ScopeGuard;
    f()
}

/// Look up the store provided by the nearest enclosing [`provide_posts`].
///
/// Fails with [`Error::ContextUnavailable`] when called outside any scope.
pub fn use_posts() -> Result<PostStore> {
    CONTEXT_STACK.with(|stack| {
        stack
            .borrow()
            .last()
            .cloned()
            .ok_or(Error::ContextUnavailable)
    })
}

/// Check whether a provider is active.
pub fn has_posts_context() -> bool {
    CONTEXT_STACK.with(|stack| !stack.borrow().is_empty())
}
