//! Derivation of the visible post subset from the current view selections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::models::Post;

/// The four navigation views. `MyPosts` hosts the drawing surface and does
/// not render the post list; the derivation stays total over it regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    #[default]
    Home,
    Saved,
    MyPosts,
    Memories,
}

/// Visible subsequence of `posts` for the given selections.
///
/// The mode narrows first, then a non-blank search query narrows further;
/// neither step reorders, so the result keeps the collection's
/// most-recent-first order.
pub fn visible_posts<'a>(
    posts: &'a [Post],
    mode: ViewMode,
    selected_date: Option<NaiveDate>,
    query: &str,
) -> Vec<&'a Post> {
    let by_mode = posts.iter().filter(|post| match mode {
        ViewMode::Home => true,
        ViewMode::Saved => post.is_saved,
        ViewMode::MyPosts => true,
        ViewMode::Memories => match selected_date {
            Some(day) => post.calendar_day() == day,
            None => true,
        },
    });

    let needle = query.trim().to_lowercase();
    by_mode
        .filter(|post| {
            if needle.is_empty() {
                return true;
            }
            post.content.to_lowercase().contains(&needle)
                || post.author.name.to_lowercase().contains(&needle)
        })
        .collect()
}
