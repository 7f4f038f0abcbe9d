use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    errors::StoreError,
    models::{Difficulty, GameSession, LeaderboardEntry},
};

pub mod fallback;
pub mod memory;
pub mod redis;
mod scripts;

pub use fallback::FallbackStore;
pub use memory::MemoryStore;
pub use self::redis::RedisStore;

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// Game sessions, atomic per session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: &GameSession) -> Result<(), StoreError>;
    async fn get(&self, session_id: Uuid) -> Result<Option<GameSession>, StoreError>;
    async fn update(&self, session: &GameSession) -> Result<(), StoreError>;
}

/// Best score per (player, difficulty).
#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    /// Always counts the game; only raises the stored score.
    async fn save_score(&self, session: &GameSession) -> Result<LeaderboardEntry, StoreError>;

    /// Highest scores first, ranked 1..=limit. `None` lists every difficulty.
    async fn leaderboard(
        &self,
        difficulty: Option<Difficulty>,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// 1 + number of players with a strictly higher score. `None` if the player has no entry.
    async fn rank(&self, username: &str, difficulty: Difficulty)
        -> Result<Option<u32>, StoreError>;
}

pub fn clamp_limit(limit: Option<usize>) -> usize {
    match limit {
        Some(0) | None => DEFAULT_LEADERBOARD_LIMIT,
        Some(n) => n.min(MAX_LEADERBOARD_LIMIT),
    }
}

/// Sorts by score (earlier update first on ties), assigns ranks and truncates.
pub(crate) fn rank_entries(mut entries: Vec<LeaderboardEntry>, limit: usize) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| a.updated_at.cmp(&b.updated_at))
    });
    entries.truncate(limit);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i as u32 + 1;
    }
    entries
}

pub(crate) fn merge_score(
    existing: Option<LeaderboardEntry>,
    session: &GameSession,
    now: chrono::DateTime<chrono::Utc>,
) -> LeaderboardEntry {
    match existing {
        Some(mut entry) => {
            entry.games_played += 1;
            entry.updated_at = now;
            entry.total_score = entry.total_score.max(session.total_score);
            entry
        }
        None => LeaderboardEntry {
            rank: 0,
            username: session.username.clone(),
            difficulty: session.difficulty,
            total_score: session.total_score,
            games_played: 1,
            updated_at: now,
        },
    }
}
