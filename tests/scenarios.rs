//! End-to-end scenarios over the shared post store, driven through the
//! same component tree the binary mounts.

use std::rc::Rc;

use atomic_blog::pipeline::render_frame;
use atomic_blog::state::focus::reset_focus_state;
use atomic_blog::state::keyboard::reset_keyboard_state;
use atomic_blog::{
    App, Config, Error, Post, PostGenerator, PostStore, provide_posts, search_posts, use_posts,
};

fn setup() -> App {
    reset_focus_state();
    reset_keyboard_state();
    let config = Config {
        archive_size: 200,
        seed: Some(42),
        ..Config::default()
    };
    App::new(&config)
}

fn haystack(post: &Post) -> String {
    format!("{} {}", post.title, post.body).to_lowercase()
}

#[test]
fn test_initial_store() {
    let app = setup();
    let store = app.store();

    assert_eq!(store.posts().len(), 30);
    assert_eq!(store.query(), "");
    assert!(Rc::ptr_eq(&store.visible_posts(), &store.posts()));

    let frame = render_frame(&app, 100, 30);
    assert!(frame.buffer.find_row("30 atomic posts found").is_some());
}

#[test]
fn test_search_filters_case_insensitively() {
    let app = setup();
    let store = app.store();
    let all = store.posts();

    store.set_query("the");
    let visible = store.visible_posts();

    let expected: Vec<Post> = all
        .iter()
        .filter(|p| haystack(p).contains("the"))
        .cloned()
        .collect();
    assert_eq!(visible.as_slice(), expected.as_slice());
    assert_eq!(store.posts().len(), 30, "filtering never mutates the collection");

    let frame = render_frame(&app, 100, 30);
    let line = format!("{} atomic posts found", expected.len());
    assert!(frame.buffer.find_row(&line).is_some());
}

#[test]
fn test_added_post_is_searchable() {
    let app = setup();
    let store = app.store();

    store.add_post(Post::new("foo", "bar baz"));
    store.set_query("bar");

    let visible = store.visible_posts();
    assert!(visible.contains(&Post::new("foo", "bar baz")));
    assert_eq!(store.posts().len(), 31);
    assert_eq!(store.posts().last(), Some(&Post::new("foo", "bar baz")));
}

#[test]
fn test_clear_empties_every_view() {
    let app = setup();
    let store = app.store();

    store.clear_posts();
    assert!(store.posts().is_empty());
    assert!(store.visible_posts().is_empty());

    store.set_query("a");
    assert!(store.visible_posts().is_empty());

    let frame = render_frame(&app, 100, 30);
    assert!(frame.buffer.find_row("0 atomic posts found").is_some());
}

#[test]
fn test_archive_entry_becomes_last_post() {
    let app = setup();
    let store = app.store();
    let before = store.posts();

    let entry = app.archive().posts()[17].clone();
    let added = app.archive().add_entry(17, store);

    let after = store.posts();
    assert_eq!(added, Some(entry.clone()));
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&entry));
    assert_eq!(&after[..before.len()], before.as_slice());
    assert_eq!(app.archive().posts().len(), 200);
}

#[test]
fn test_clear_leaves_archive_alone() {
    let app = setup();
    let archive = app.archive().posts();

    app.store().clear_posts();

    assert!(Rc::ptr_eq(&archive, &app.archive().posts()));
    assert_eq!(archive.len(), 200);
}

#[test]
fn test_set_query_twice_is_stable() {
    let app = setup();
    let store = app.store();

    store.set_query("port");
    let first = store.visible_posts();
    store.set_query("port");
    assert_eq!(first, store.visible_posts());
}

#[test]
fn test_context_scope() {
    assert!(matches!(use_posts(), Err(Error::ContextUnavailable)));

    let outer = PostStore::with_posts(PostGenerator::seeded(1).generate_many(2));
    let inner = PostStore::with_posts(atomic_blog::post::empty());

    provide_posts(&outer, || {
        assert_eq!(use_posts().map(|s| s.posts().len()).ok(), Some(2));
        provide_posts(&inner, || {
            assert_eq!(use_posts().map(|s| s.posts().len()).ok(), Some(0));
        });
        // Writes through the looked-up handle reach the provided store
        if let Ok(store) = use_posts() {
            store.set_query("x");
        }
    });

    assert_eq!(outer.query(), "x");
    assert!(use_posts().is_err());
}

#[test]
fn test_seeded_apps_match() {
    let a = setup();
    let b = setup();
    assert_eq!(a.store().posts(), b.store().posts());
    assert_eq!(a.archive().posts(), b.archive().posts());
}

#[test]
fn test_search_posts_matches_store() {
    let posts = PostGenerator::seeded(7).generate_many(50);
    let store = PostStore::with_posts(Rc::clone(&posts));
    store.set_query("E");
    assert_eq!(store.visible_posts(), search_posts(&posts, "e"));
}
