//! Error types.

use std::io;

/// Errors surfaced by atomic-blog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The post store was looked up outside of a `provide_posts` scope.
    ///
    /// This is a wiring mistake in the view tree, not something a user can
    /// trigger at runtime.
    #[error("post context is unavailable: use_posts() was called outside of provide_posts()")]
    ContextUnavailable,

    /// Terminal setup, teardown or output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The log file or tracing subscriber could not be set up.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
