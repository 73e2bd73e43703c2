use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder avatar shown before the user uploads one (light-gray inline SVG).
pub const BLANK_AVATAR: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" fill=\"%23f3f4f6\"%3E%3Crect width=\"24\" height=\"24\" /%3E%3C/svg%3E";

/// User entity - the single local identity that authors posts and comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Image URI or data URI, treated as an opaque string.
    pub avatar: String,
}

impl User {
    /// Sentinel identity used until a profile has been set.
    ///
    /// The name is a single space, not an empty string; profile validation
    /// rejects it as a submitted name.
    pub fn guest() -> Self {
        Self {
            id: "guest".to_string(),
            name: " ".to_string(),
            avatar: BLANK_AVATAR.to_string(),
        }
    }
}

/// Comment entity - a reaction on one of the user's own posts
///
/// `author` is a value snapshot taken at creation time; later profile edits
/// never rewrite it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: User,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: User, content: impl Into<String>) -> Self {
        Self {
            id: fresh_entry_id(),
            author,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Post entity - one memo in the journal, owning its comments exclusively
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: User,
    pub content: String,
    /// Optional attached picture as a data URI (upload or drawing surface).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub likes: i64,
    pub comments: Vec<Comment>,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "isSaved", default)]
    pub is_saved: bool,
}

impl Post {
    pub fn new(author: User, content: impl Into<String>, image: Option<String>) -> Self {
        Self {
            id: fresh_entry_id(),
            author,
            content: content.into(),
            image,
            likes: 0,
            comments: Vec::new(),
            timestamp: Utc::now(),
            is_saved: false,
        }
    }

    /// UTC calendar day of this post, as used by the memories view.
    pub fn calendar_day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Gamification counters: completed level cycles plus progress within the
/// current cycle, `experience` always in `[0, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub level: u32,
    pub experience: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            level: 0,
            experience: 0.0,
        }
    }
}

/// Interface language preference. The lookup table itself lives in the
/// presentation shell; only the chosen code is core state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    ZhCn,
    En,
}

impl Language {
    /// Stable code string, as persisted and as consumed by the shell.
    pub fn as_code(self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh-CN" => Some(Language::ZhCn),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

/// Time-derived unique entry id: epoch milliseconds plus a random suffix so
/// two entries created within the same millisecond still differ.
pub fn fresh_entry_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_user_is_the_documented_sentinel() {
        let guest = User::guest();
        assert_eq!(guest.id, "guest");
        assert_eq!(guest.name, " ");
        assert_eq!(guest.avatar, BLANK_AVATAR);
    }

    #[test]
    fn fresh_entry_ids_differ_within_one_millisecond() {
        let a = fresh_entry_id();
        let b = fresh_entry_id();
        assert_ne!(a, b);
    }

    #[test]
    fn new_post_has_empty_comments_and_is_not_saved() {
        let post = Post::new(User::guest(), "hello", None);
        assert!(post.comments.is_empty());
        assert_eq!(post.likes, 0);
        assert!(!post.is_saved);
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_code("zh-CN"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::ZhCn.as_code(), "zh-CN");
    }
}
