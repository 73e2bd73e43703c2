//! Round-trip and degradation behavior of the persisted records.

use chrono::{TimeZone, Utc};
use journal_service::domain::models::{Comment, Language, Post, Stats, User};
use journal_service::repository::records::{LANGUAGE_KEY, POSTS_KEY, STATS_KEY, USER_KEY};
use journal_service::repository::JournalRepository;
use local_store::{FileStore, KeyValueStore, MemoryStore};

fn sample_user() -> User {
    User {
        id: "guest".to_string(),
        name: "Mimi".to_string(),
        avatar: "data:image/png;base64,xyz".to_string(),
    }
}

fn sample_posts() -> Vec<Post> {
    let mut commented = Post::new(sample_user(), "hello world", None);
    commented.timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 5).unwrap()
        + chrono::Duration::milliseconds(123);
    let mut comment = Comment::new(sample_user(), "a note");
    comment.timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
        + chrono::Duration::milliseconds(456);
    commented.comments.push(comment);

    let mut pictured = Post::new(sample_user(), "look at this", Some("data:image/png;base64,abc".to_string()));
    pictured.is_saved = true;

    vec![pictured, commented]
}

#[test]
fn posts_round_trip_with_millisecond_timestamps() {
    let repo = JournalRepository::new(MemoryStore::new());
    let posts = sample_posts();

    repo.save_posts(&posts).unwrap();
    let loaded = repo.load_posts();

    assert_eq!(loaded, posts);
    assert_eq!(loaded[1].timestamp.timestamp_subsec_millis(), 123);
    assert_eq!(loaded[1].comments[0].timestamp.timestamp_subsec_millis(), 456);
}

#[test]
fn timestamps_serialize_as_rfc3339_text() {
    let store = MemoryStore::new();
    let repo = JournalRepository::new(store);
    repo.save_posts(&sample_posts()).unwrap();

    let raw = repo.store().get(POSTS_KEY).unwrap().unwrap();
    assert!(raw.contains("2024-01-01T08:30:05.123"));
    assert!(raw.contains("\"isSaved\":true"));
    // An absent image is omitted from the record, not serialized as null.
    assert!(!raw.contains("\"image\":null"));
}

#[test]
fn user_and_stats_round_trip() {
    let repo = JournalRepository::new(MemoryStore::new());

    let user = sample_user();
    repo.save_user(&user).unwrap();
    assert_eq!(repo.load_user(), user);

    let stats = Stats {
        level: 2,
        experience: 66.68,
    };
    repo.save_stats(&stats).unwrap();
    assert_eq!(repo.load_stats(), stats);
}

#[test]
fn absent_records_degrade_to_defaults() {
    let repo = JournalRepository::new(MemoryStore::new());

    assert_eq!(repo.load_user(), User::guest());
    assert!(repo.load_posts().is_empty());
    assert_eq!(repo.load_stats(), Stats::default());
    assert_eq!(repo.load_language(), Language::ZhCn);
}

#[test]
fn corrupt_records_degrade_to_defaults_without_panicking() {
    let store = MemoryStore::new();
    store.put(POSTS_KEY, "{not json").unwrap();
    store.put(USER_KEY, "[]").unwrap();
    store.put(STATS_KEY, "\"level\"").unwrap();
    store.put(LANGUAGE_KEY, "klingon").unwrap();

    let repo = JournalRepository::new(store);
    assert!(repo.load_posts().is_empty());
    assert_eq!(repo.load_user(), User::guest());
    assert_eq!(repo.load_stats(), Stats::default());
    assert_eq!(repo.load_language(), Language::default());
}

#[test]
fn records_missing_optional_fields_still_parse() {
    // A record written before the saved flag existed.
    let store = MemoryStore::new();
    store
        .put(
            POSTS_KEY,
            r#"[{"id":"1700000000000-abcd1234","author":{"id":"guest","name":" ","avatar":""},"content":"old memo","likes":0,"comments":[],"timestamp":"2023-11-14T22:13:20.000Z"}]"#,
        )
        .unwrap();

    let repo = JournalRepository::new(store);
    let posts = repo.load_posts();
    assert_eq!(posts.len(), 1);
    assert!(!posts[0].is_saved);
    assert!(posts[0].image.is_none());
}

#[test]
fn language_record_is_the_bare_code_string() {
    let store = MemoryStore::new();
    let repo = JournalRepository::new(store);

    repo.save_language(Language::En).unwrap();
    assert_eq!(repo.store().get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
    assert_eq!(repo.load_language(), Language::En);
}

#[test]
fn records_survive_a_file_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let posts = sample_posts();

    {
        let repo = JournalRepository::new(FileStore::open(dir.path()).unwrap());
        repo.save_posts(&posts).unwrap();
        repo.save_stats(&Stats {
            level: 1,
            experience: 33.34,
        })
        .unwrap();
    }

    let repo = JournalRepository::new(FileStore::open(dir.path()).unwrap());
    assert_eq!(repo.load_posts(), posts);
    assert_eq!(repo.load_stats().level, 1);
}
