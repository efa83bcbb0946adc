//! Shared post state and the context that exposes it to the view tree.
//!
//! - [`store`] - `PostStore`: canonical posts, search query, derived view
//! - [`provider`] - `provide_posts` / `use_posts` scope lookup

pub mod provider;
pub mod store;

pub use provider::{has_posts_context, provide_posts, use_posts};
pub use store::{INITIAL_POST_COUNT, PostStore, search_posts};
