//! # atomic-blog
//!
//! A terminal blog demo built on [spark-signals](https://github.com/RLabs-Inc/spark-signals)
//! for fine-grained reactivity.
//!
//! ## Architecture
//!
//! One [`PostStore`] owns the posts and the search query. The [`App`] provides
//! it to every component through a scoped context ([`provide_posts`] /
//! [`use_posts`]), so no component receives posts through its constructor.
//!
//! The rendering pipeline is purely derived-based:
//! ```text
//! App (signals + store) → frameDerived → render effect → DiffRenderer
//! ```
//!
//! ## Modules
//!
//! - [`post`] - Post type and random post generation
//! - [`context`] - The post store and its scoped provider
//! - [`view`] - Components (header, form, list, archive, footer)
//! - [`state`] - Focus, keyboard routing, terminal input
//! - [`pipeline`] - Frame derived, render effect, event loop
//! - [`renderer`] - Frame buffer and diff rendering

pub mod config;
pub mod context;
pub mod error;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod post;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use config::{Cli, Config};
pub use context::{INITIAL_POST_COUNT, PostStore, provide_posts, search_posts, use_posts};
pub use error::{Error, Result};
pub use pipeline::{MountHandle, mount, run, tick};
pub use post::{Post, PostGenerator, Posts};
pub use renderer::{DiffRenderer, FrameBuffer};
pub use theme::Theme;
pub use view::{App, AppHandle, Component};
