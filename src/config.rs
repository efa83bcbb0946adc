//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::context::INITIAL_POST_COUNT;

/// Archive entries generated when `--archive-size` is not given.
pub const DEFAULT_ARCHIVE_SIZE: usize = 10_000;

#[derive(Parser, Debug)]
#[command(name = "atomic-blog")]
#[command(about = "A terminal blog demo of shared state across sibling components")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
    /// Number of posts generated at startup
    #[arg(long, default_value_t = INITIAL_POST_COUNT)]
    pub posts: usize,

    /// Number of posts in the archive
    #[arg(long, default_value_t = DEFAULT_ARCHIVE_SIZE)]
    pub archive_size: usize,

    /// Seed for deterministic post generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long, env = "ATOMIC_BLOG_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Resolved settings the app runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub initial_posts: usize,
    pub archive_size: usize,
    pub seed: Option<u64>,
    pub dark: bool,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_posts: INITIAL_POST_COUNT,
            archive_size: DEFAULT_ARCHIVE_SIZE,
            seed: None,
            dark: false,
            log_file: None,
            verbose: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            initial_posts: cli.posts,
            archive_size: cli.archive_size,
            seed: cli.seed,
            dark: cli.dark,
            log_file: cli.log_file,
            verbose: cli.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_default() {
        let cli = Cli::try_parse_from(["atomic-blog"]).unwrap();
        let config = Config::from(cli);

        // Log file may come from the environment; compare the rest
        assert_eq!(config.initial_posts, 30);
        assert_eq!(config.archive_size, 10_000);
        assert_eq!(config.seed, None);
        assert!(!config.dark);
        assert!(!config.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "atomic-blog",
            "--posts",
            "5",
            "--archive-size",
            "100",
            "--seed",
            "42",
            "--dark",
            "--log-file",
            "/tmp/blog.log",
            "-v",
        ])
        .unwrap();
        let config = Config::from(cli);

        assert_eq!(
            config,
            Config {
                initial_posts: 5,
                archive_size: 100,
                seed: Some(42),
                dark: true,
                log_file: Some(PathBuf::from("/tmp/blog.log")),
                verbose: true,
            }
        );
    }

    #[test]
    fn test_rejects_negative_counts() {
        assert!(Cli::try_parse_from(["atomic-blog", "--posts", "-1"]).is_err());
    }
}
