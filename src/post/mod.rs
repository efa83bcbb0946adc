//! Posts - the one data type the whole app is about.
//!
//! A [`Post`] is an immutable title/body pair. Collections of posts are
//! shared as [`Posts`] (`Rc<Vec<Post>>`): list operations build a new
//! collection instead of mutating one in place, so a render holding an old
//! snapshot never sees it change underneath it.

pub mod generator;

use std::fmt;
use std::rc::Rc;

pub use generator::{PostGenerator, generate};

/// An ordered, shared, immutable collection of posts.
pub type Posts = Rc<Vec<Post>>;

/// A title/body pair of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Post {
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Check whether `"title body"` contains `needle`, ignoring case.
    ///
    /// `needle` must already be lower-cased; callers filtering a whole
    /// collection lower-case the query once instead of per post.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        let haystack = format!("{} {}", self.title, self.body).to_lowercase();
        haystack.contains(needle)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

/// An empty collection.
pub fn empty() -> Posts {
    Rc::new(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_title_and_body() {
        let post = Post::new("Neural Bandwidth", "Try to hack the SSL port");

        assert!(post.matches_lowercase("neural"));
        assert!(post.matches_lowercase("ssl port"));
        assert!(!post.matches_lowercase("pixel"));
    }

    #[test]
    fn test_matches_across_the_joining_space() {
        let post = Post::new("foo", "bar baz");

        assert!(post.matches_lowercase("foo bar"));
        assert!(!post.matches_lowercase("foobar"));
    }

    #[test]
    fn test_matches_is_substring_not_word() {
        let post = Post::new("auxiliary", "there");

        assert!(post.matches_lowercase("the"));
        assert!(post.matches_lowercase("xili"));
    }

    #[test]
    fn test_display() {
        let post = Post::new("Digital Feed", "Parse the feed!");
        assert_eq!(post.to_string(), "Digital Feed: Parse the feed!");
    }
}
