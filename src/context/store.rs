//! Shared Post Store - the single source of truth for posts and the query.
//!
//! Both pieces of state are signals, so anything that reads them inside a
//! `derived` or `effect` (the frame pipeline) re-runs after a mutation.
//! The filtered view is never stored; [`PostStore::visible_posts`]
//! recomputes it from the two signals on every read.

use std::rc::Rc;

use rand::Rng;
use spark_signals::{Signal, signal};
use tracing::debug;

use crate::post::{Post, PostGenerator, Posts};

/// Number of posts a store starts with.
pub const INITIAL_POST_COUNT: usize = 30;

/// Handle to the shared post state.
///
/// Cloning a `PostStore` clones the signal handles, not the state: every
/// clone reads and writes the same posts and query.
#[derive(Clone)]
pub struct PostStore {
    posts: Signal<Posts>,
    query: Signal<String>,
}

impl PostStore {
    /// Create the store with `count` generated posts and an empty query.
    pub fn initialize<R: Rng>(generator: &mut PostGenerator<R>, count: usize) -> Self {
        let posts = generator.generate_many(count);
        debug!(count = posts.len(), "post store initialized");
        Self::with_posts(posts)
    }

    /// Create the store from an existing collection and an empty query.
    pub fn with_posts(posts: Posts) -> Self {
        Self {
            posts: signal(posts),
            query: signal(String::new()),
        }
    }

    /// The canonical collection, unfiltered.
    pub fn posts(&self) -> Posts {
        self.posts.get()
    }

    /// The current query, exactly as it was set.
    pub fn query(&self) -> String {
        self.query.get()
    }

    /// Append a post. No validation happens here; the form gates input.
    pub fn add_post(&self, post: Post) {
        let current = self.posts.get();
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(post);

        debug!(count = next.len(), "post added");
        self.posts.set(Rc::new(next));
    }

    /// Replace the canonical collection with an empty one.
    pub fn clear_posts(&self) {
        debug!(dropped = self.posts.get().len(), "posts cleared");
        self.posts.set(crate::post::empty());
    }

    /// Store the query verbatim (no trimming or case folding).
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query.get() {
            return;
        }
        debug!(query = %query, "search query changed");
        self.query.set(query);
    }

    /// The posts matching the current query.
    ///
    /// With an empty query this is the canonical collection itself (same
    /// `Rc`), not a copy.
    pub fn visible_posts(&self) -> Posts {
        search_posts(&self.posts.get(), &self.query.get())
    }
}

/// Filter `posts` to those whose `"title body"` contains `query`, ignoring
/// case, keeping their order.
///
/// An empty query returns `posts` unchanged (same `Rc`).
pub fn search_posts(posts: &Posts, query: &str) -> Posts {
    if query.is_empty() {
        return Rc::clone(posts);
    }

    let needle = query.to_lowercase();
    Rc::new(
        posts
            .iter()
            .filter(|post| post.matches_lowercase(&needle))
            .cloned()
            .collect(),
    )
}
