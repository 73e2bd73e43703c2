//! Pure state transitions for the persisted aggregates.
//!
//! Every function borrows the current state and returns a freshly built
//! value; callers persist the result and then adopt it. Unknown ids leave
//! the collection structurally unchanged, and the relative order of
//! untouched entries is always preserved.

use super::models::{Comment, Post, User};

/// Prepend a newly built post; the newest post is always index 0.
pub fn create_post(posts: &[Post], post: Post) -> Vec<Post> {
    let mut next = Vec::with_capacity(posts.len() + 1);
    next.push(post);
    next.extend(posts.iter().cloned());
    next
}

/// Flip the saved flag on the matching post only.
pub fn toggle_save(posts: &[Post], post_id: &str) -> Vec<Post> {
    posts
        .iter()
        .map(|post| {
            if post.id == post_id {
                let mut toggled = post.clone();
                toggled.is_saved = !post.is_saved;
                toggled
            } else {
                post.clone()
            }
        })
        .collect()
}

/// Remove the matching post; its comments go with it.
pub fn delete_post(posts: &[Post], post_id: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| post.id != post_id)
        .cloned()
        .collect()
}

/// Append a comment to the matching post, preserving prior comment order.
pub fn add_comment(posts: &[Post], post_id: &str, comment: Comment) -> Vec<Post> {
    posts
        .iter()
        .map(|post| {
            if post.id == post_id {
                let mut updated = post.clone();
                updated.comments.push(comment.clone());
                updated
            } else {
                post.clone()
            }
        })
        .collect()
}

/// Remove one comment from the matching post's sequence only.
pub fn delete_comment(posts: &[Post], post_id: &str, comment_id: &str) -> Vec<Post> {
    posts
        .iter()
        .map(|post| {
            if post.id == post_id {
                let mut updated = post.clone();
                updated.comments.retain(|c| c.id != comment_id);
                updated
            } else {
                post.clone()
            }
        })
        .collect()
}

/// Replace the current user's name and avatar.
///
/// Returns `None` (no state change) when the submitted name trims to empty.
pub fn update_profile(user: &User, name: &str, avatar: &str) -> Option<User> {
    if name.trim().is_empty() {
        return None;
    }
    Some(User {
        id: user.id.clone(),
        name: name.to_string(),
        avatar: avatar.to_string(),
    })
}

/// Final post text from an optional feeling emoji and the typed content.
///
/// The feeling prefixes the trimmed content; a feeling alone is a valid
/// submission, so the combined string is trimmed again.
pub fn compose_content(feeling: Option<&str>, content: &str) -> String {
    match feeling {
        Some(feeling) => format!("{} {}", feeling, content.trim())
            .trim()
            .to_string(),
        None => content.trim().to_string(),
    }
}
