/// Journal service - the single owner of the persisted aggregates.
///
/// Holds the current user, the post collection, the gamification stats and
/// the language preference, plus the UI filter selections, and is the only
/// mutation path. Every successful mutation is immediately followed by the
/// matching repository save; a failed save surfaces to the caller and the
/// in-memory state keeps its previous value.
use chrono::NaiveDate;
use local_store::{FileStore, KeyValueStore};
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::filter::{self, ViewMode};
use crate::domain::models::{Comment, Language, Post, Stats, User};
use crate::domain::mutators;
use crate::domain::progression::{self, LevelTier};
use crate::error::ServiceResult;
use crate::repository::JournalRepository;

/// Caption attached to pictures arriving from the drawing surface.
const DRAWING_CAPTION: &str = "🎨 刚刚完成了一幅大作！";

pub struct JournalService<S: KeyValueStore> {
    repo: JournalRepository<S>,
    current_user: User,
    posts: Vec<Post>,
    stats: Stats,
    language: Language,
    view: ViewMode,
    selected_date: Option<NaiveDate>,
    search_query: String,
}

impl JournalService<FileStore> {
    /// Open the file store at the configured data directory and load state.
    pub fn from_config(config: &Config) -> ServiceResult<Self> {
        let store = FileStore::open(&config.storage.data_dir)?;
        Ok(Self::load(store))
    }
}

impl<S: KeyValueStore> JournalService<S> {
    /// Load all aggregates from the store; missing or corrupt records
    /// degrade to their documented defaults.
    pub fn load(store: S) -> Self {
        let repo = JournalRepository::new(store);
        let current_user = repo.load_user();
        let posts = repo.load_posts();
        let stats = repo.load_stats();
        let language = repo.load_language();
        debug!(
            posts = posts.len(),
            level = stats.level,
            "journal state loaded"
        );
        Self {
            repo,
            current_user,
            posts,
            stats,
            language,
            view: ViewMode::default(),
            selected_date: None,
            search_query: String::new(),
        }
    }

    // ========== Post intents ==========

    /// Publish a memo. Returns the new post id, or `None` when the
    /// submission is empty (no trimmed content and no image).
    ///
    /// A successful publish also awards experience and returns the view to
    /// home so the new post is visible at the top of the feed.
    pub fn create_post(
        &mut self,
        content: &str,
        image: Option<String>,
    ) -> ServiceResult<Option<String>> {
        self.create_post_with_feeling(None, content, image)
    }

    /// Publish a memo with an optional feeling emoji prefixed to the text.
    /// A feeling alone is a valid submission.
    pub fn create_post_with_feeling(
        &mut self,
        feeling: Option<&str>,
        content: &str,
        image: Option<String>,
    ) -> ServiceResult<Option<String>> {
        let content = mutators::compose_content(feeling, content);
        if content.is_empty() && image.is_none() {
            return Ok(None);
        }

        let post = Post::new(self.current_user.clone(), content, image);
        let post_id = post.id.clone();
        let next_posts = mutators::create_post(&self.posts, post);
        let next_stats = progression::award_post_experience(&self.stats);

        self.repo.save_posts(&next_posts)?;
        self.repo.save_stats(&next_stats)?;
        self.posts = next_posts;
        self.stats = next_stats;
        if self.view != ViewMode::Home {
            self.view = ViewMode::Home;
        }

        info!(post_id = %post_id, level = self.stats.level, "post published");
        Ok(Some(post_id))
    }

    /// Publish a finished picture from the drawing surface.
    pub fn create_drawing_post(&mut self, image: String) -> ServiceResult<Option<String>> {
        self.create_post(DRAWING_CAPTION, Some(image))
    }

    /// Flip the saved flag on a post. Returns whether anything changed.
    pub fn toggle_save(&mut self, post_id: &str) -> ServiceResult<bool> {
        if !self.contains_post(post_id) {
            return Ok(false);
        }
        let next = mutators::toggle_save(&self.posts, post_id);
        self.repo.save_posts(&next)?;
        self.posts = next;
        Ok(true)
    }

    /// Remove a post and all of its comments.
    pub fn delete_post(&mut self, post_id: &str) -> ServiceResult<bool> {
        if !self.contains_post(post_id) {
            return Ok(false);
        }
        let next = mutators::delete_post(&self.posts, post_id);
        self.repo.save_posts(&next)?;
        self.posts = next;
        info!(post_id, "post deleted");
        Ok(true)
    }

    // ========== Comment intents ==========

    /// Append a comment authored by the current user. Blank content and
    /// unknown post ids are no-ops.
    pub fn add_comment(&mut self, post_id: &str, content: &str) -> ServiceResult<bool> {
        if content.trim().is_empty() || !self.contains_post(post_id) {
            return Ok(false);
        }
        let comment = Comment::new(self.current_user.clone(), content);
        let next = mutators::add_comment(&self.posts, post_id, comment);
        self.repo.save_posts(&next)?;
        self.posts = next;
        Ok(true)
    }

    /// Remove one comment from one post; a no-op unless both ids match.
    pub fn delete_comment(&mut self, post_id: &str, comment_id: &str) -> ServiceResult<bool> {
        let has_comment = self
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .is_some_and(|p| p.comments.iter().any(|c| c.id == comment_id));
        if !has_comment {
            return Ok(false);
        }
        let next = mutators::delete_comment(&self.posts, post_id, comment_id);
        self.repo.save_posts(&next)?;
        self.posts = next;
        Ok(true)
    }

    // ========== Profile and language intents ==========

    /// Replace the current user's name and avatar. A name that trims to
    /// empty rejects the whole update; existing posts keep their embedded
    /// author snapshots either way.
    pub fn update_profile(&mut self, name: &str, avatar: &str) -> ServiceResult<bool> {
        match mutators::update_profile(&self.current_user, name, avatar) {
            Some(next) => {
                self.repo.save_user(&next)?;
                self.current_user = next;
                info!("profile updated");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn set_language(&mut self, language: Language) -> ServiceResult<()> {
        self.repo.save_language(language)?;
        self.language = language;
        Ok(())
    }

    // ========== View selections ==========

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    pub fn clear_selected_date(&mut self) {
        self.selected_date = None;
    }

    /// Posts visible under the current view, date and search selections.
    pub fn visible_posts(&self) -> Vec<&Post> {
        filter::visible_posts(
            &self.posts,
            self.view,
            self.selected_date,
            &self.search_query,
        )
    }

    // ========== Read accessors ==========

    pub fn repository(&self) -> &JournalRepository<S> {
        &self.repo
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn level_tier(&self) -> LevelTier {
        LevelTier::for_level(self.stats.level)
    }

    pub fn posts_until_next_level(&self) -> u32 {
        progression::posts_until_next_level(&self.stats)
    }

    fn contains_post(&self, post_id: &str) -> bool {
        self.posts.iter().any(|p| p.id == post_id)
    }
}
