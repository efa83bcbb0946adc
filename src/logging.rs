//! Tracing setup.
//!
//! The UI owns the terminal, so logs only ever go to a file. With no log
//! file configured no subscriber is installed and every `tracing` macro is
//! a no-op.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::error::{Error, Result};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "ATOMIC_BLOG_LOG";

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("atomic_blog=debug")
    } else {
        EnvFilter::new("atomic_blog=info")
    }
}

/// Build the filter from `ATOMIC_BLOG_LOG`, falling back to the default.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose))
}

/// Install a file-writing subscriber when `log_file` is set.
pub fn init_tracing(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| {
            Error::Logging(format!("cannot open {}: {err}", path.display()))
        })?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(file_layer)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_is_a_noop() {
        assert!(init_tracing(None, true).is_ok());
    }

    #[test]
    fn test_unwritable_path_is_a_logging_error() {
        let path = Path::new("/nonexistent-dir/atomic-blog/app.log");
        let err = init_tracing(Some(path), false).unwrap_err();
        assert!(matches!(err, Error::Logging(_)));
    }

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(false).to_string(), "atomic_blog=info");
        assert_eq!(default_filter(true).to_string(), "atomic_blog=debug");
    }
}
