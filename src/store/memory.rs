use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{merge_score, rank_entries, LeaderboardStore, SessionStore};
use crate::{
    errors::StoreError,
    models::{Difficulty, GameSession, LeaderboardEntry},
};

/// Process-local storage. Same semantics as the durable store, nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    sessions: RwLock<HashMap<Uuid, GameSession>>,
    // key: username:difficulty
    scores: RwLock<HashMap<String, LeaderboardEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn score_key(username: &str, difficulty: Difficulty) -> String {
        format!("{}:{}", username, difficulty)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn create(&self, session: &GameSession) -> Result<(), StoreError> {
        self.sessions
            .write()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn get(&self, session_id: Uuid) -> Result<Option<GameSession>, StoreError> {
        Ok(self.sessions.read().get(&session_id).cloned())
    }

    async fn update(&self, session: &GameSession) -> Result<(), StoreError> {
        self.sessions
            .write()
            .insert(session.session_id, session.clone());
        Ok(())
    }
}

#[async_trait]
impl LeaderboardStore for MemoryStore {
    async fn save_score(&self, session: &GameSession) -> Result<LeaderboardEntry, StoreError> {
        let key = Self::score_key(&session.username, session.difficulty);
        let mut scores = self.scores.write();
        let entry = merge_score(scores.remove(&key), session, Utc::now());
        scores.insert(key, entry.clone());
        Ok(entry)
    }

    async fn leaderboard(
        &self,
        difficulty: Option<Difficulty>,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let entries = self
            .scores
            .read()
            .values()
            .filter(|entry| difficulty.map_or(true, |d| entry.difficulty == d))
            .cloned()
            .collect();
        Ok(rank_entries(entries, limit))
    }

    async fn rank(
        &self,
        username: &str,
        difficulty: Difficulty,
    ) -> Result<Option<u32>, StoreError> {
        let scores = self.scores.read();
        let Some(own) = scores.get(&Self::score_key(username, difficulty)) else {
            return Ok(None);
        };
        let higher = scores
            .values()
            .filter(|entry| entry.difficulty == difficulty && entry.total_score > own.total_score)
            .count();
        Ok(Some(higher as u32 + 1))
    }
}
