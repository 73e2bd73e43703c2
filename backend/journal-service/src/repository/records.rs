//! Durable round-trip of the persisted aggregates through the key-value
//! store.
//!
//! Each aggregate lives under its own fixed key; the version suffix allows
//! schema migration by abandoning old keys. Loads never fail: an absent,
//! unreadable, or unparseable record degrades to the documented default and
//! the discarded record is logged. Saves propagate store failures to the
//! caller; nothing is silently dropped on the write path.

use local_store::KeyValueStore;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::models::{Language, Post, Stats, User};
use crate::error::ServiceResult;

/// Storage key for the current user record.
pub const USER_KEY: &str = "hao_mao_user_v4";
/// Storage key for the post collection record.
pub const POSTS_KEY: &str = "hao_mao_posts_v4";
/// Storage key for the gamification stats record.
pub const STATS_KEY: &str = "hao_mao_stats_v4";
/// Storage key for the interface language preference (bare code string).
pub const LANGUAGE_KEY: &str = "hao_mao_lang";

/// Repository for the journal's persisted records.
#[derive(Debug, Clone)]
pub struct JournalRepository<S> {
    store: S,
}

impl<S: KeyValueStore> JournalRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the current user, falling back to the guest sentinel.
    pub fn load_user(&self) -> User {
        self.load_json(USER_KEY).unwrap_or_else(User::guest)
    }

    /// Load the post collection, falling back to an empty collection.
    ///
    /// Timestamps on posts and on their comments are rehydrated from their
    /// RFC 3339 textual form by the typed record deserialization.
    pub fn load_posts(&self) -> Vec<Post> {
        self.load_json(POSTS_KEY).unwrap_or_default()
    }

    /// Load the gamification stats, falling back to level 0 / experience 0.
    pub fn load_stats(&self) -> Stats {
        self.load_json(STATS_KEY).unwrap_or_default()
    }

    /// Load the language preference; unknown or missing codes fall back to
    /// the default.
    pub fn load_language(&self) -> Language {
        match self.read_record(LANGUAGE_KEY) {
            Some(code) => Language::from_code(code.trim()).unwrap_or_else(|| {
                warn!(key = LANGUAGE_KEY, code = %code, "unknown language code, using default");
                Language::default()
            }),
            None => Language::default(),
        }
    }

    pub fn save_user(&self, user: &User) -> ServiceResult<()> {
        let raw = serde_json::to_string(user)?;
        self.store.put(USER_KEY, &raw)?;
        Ok(())
    }

    pub fn save_posts(&self, posts: &[Post]) -> ServiceResult<()> {
        let raw = serde_json::to_string(posts)?;
        self.store.put(POSTS_KEY, &raw)?;
        Ok(())
    }

    pub fn save_stats(&self, stats: &Stats) -> ServiceResult<()> {
        let raw = serde_json::to_string(stats)?;
        self.store.put(STATS_KEY, &raw)?;
        Ok(())
    }

    /// The language record stores the bare code string, not a JSON document.
    pub fn save_language(&self, language: Language) -> ServiceResult<()> {
        self.store.put(LANGUAGE_KEY, language.as_code())?;
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_record(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "discarding unparseable record");
                None
            }
        }
    }

    fn read_record(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "record read failed, using default");
                None
            }
        }
    }
}
