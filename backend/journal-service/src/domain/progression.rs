//! Level/experience progression driven by post creation.
//!
//! Experience is a modular counter: each published post adds a fixed
//! increment, and reaching the threshold rolls the counter back to zero
//! while the level advances by one. Only post creation qualifies; comments,
//! saves and deletes never move it.

use super::models::Stats;

/// Experience awarded per published post (one third of a level, rounded up).
pub const EXPERIENCE_PER_POST: f64 = 33.34;

/// Experience at which the level rolls over.
pub const LEVEL_UP_THRESHOLD: f64 = 100.0;

/// Divisor the progress panel uses when projecting remaining posts.
const REMAINING_POSTS_DIVISOR: f64 = 33.33;

/// Next stats after one successful post creation.
///
/// On rollover the remainder above the threshold is discarded, not carried
/// over: three posts land exactly on the next level with experience 0.
pub fn award_post_experience(stats: &Stats) -> Stats {
    let experience = stats.experience + EXPERIENCE_PER_POST;
    if experience >= LEVEL_UP_THRESHOLD {
        Stats {
            level: stats.level + 1,
            experience: 0.0,
        }
    } else {
        Stats {
            level: stats.level,
            experience,
        }
    }
}

/// Posts still needed to reach the next level, as shown by the progress
/// panel. Uses the panel's display divisor, not the award constant.
pub fn posts_until_next_level(stats: &Stats) -> u32 {
    ((LEVEL_UP_THRESHOLD - stats.experience) / REMAINING_POSTS_DIVISOR).ceil() as u32
}

/// Named tier a level falls into, with its display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTier {
    Kitten,
    BigCat,
    Elder,
}

impl LevelTier {
    pub fn for_level(level: u32) -> Self {
        if level >= 3 {
            LevelTier::Elder
        } else if level >= 1 {
            LevelTier::BigCat
        } else {
            LevelTier::Kitten
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LevelTier::Kitten => "备忘小猫",
            LevelTier::BigCat => "备忘大猫",
            LevelTier::Elder => "备忘耄耋",
        }
    }
}

/// Achievement badges unlocked by level milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    CoffeeLover,
    EarlyBird,
}

impl Badge {
    pub fn unlock_level(self) -> u32 {
        match self {
            Badge::CoffeeLover => 1,
            Badge::EarlyBird => 3,
        }
    }

    pub fn is_unlocked(self, stats: &Stats) -> bool {
        stats.level >= self.unlock_level()
    }
}
