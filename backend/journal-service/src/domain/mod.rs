pub mod filter;
pub mod models;
pub mod mutators;
pub mod progression;

pub use filter::ViewMode;
pub use models::{Comment, Language, Post, Stats, User};
pub use progression::LevelTier;
