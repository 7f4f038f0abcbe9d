use ::redis::{aio::ConnectionManager, Script};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tracing::debug;
use uuid::Uuid;

use super::{rank_entries, scripts, LeaderboardStore, SessionStore};
use crate::{
    errors::StoreError,
    models::{Difficulty, GameSession, LeaderboardEntry},
};

/// Abandoned sessions expire after a day.
const SESSION_TTL_SECONDS: u64 = 24 * 60 * 60;

fn session_key(session_id: Uuid) -> String {
    format!("session:{}", session_id)
}

fn entries_key(difficulty: Difficulty) -> String {
    format!("leaderboard:{}:entries", difficulty)
}

fn ranking_key(difficulty: Difficulty) -> String {
    format!("leaderboard:{}", difficulty)
}

/// Durable sessions and leaderboard on Redis.
///
/// Sessions are JSON blobs under `session:{id}`. Leaderboard entries live in a hash
/// per difficulty, with a sorted set mirroring best scores for rank queries. Both are
/// written together by `SAVE_SCORE.lua`.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    async fn write_session(&self, session: &GameSession) -> Result<(), StoreError> {
        let payload = serde_json::to_string(session)?;
        let mut conn = self.conn.clone();
        ::redis::cmd("SET")
            .arg(session_key(session.session_id))
            .arg(payload)
            .arg("EX")
            .arg(SESSION_TTL_SECONDS)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for RedisStore {
    async fn create(&self, session: &GameSession) -> Result<(), StoreError> {
        self.write_session(session).await
    }

    async fn get(&self, session_id: Uuid) -> Result<Option<GameSession>, StoreError> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = ::redis::cmd("GET")
            .arg(session_key(session_id))
            .query_async(&mut conn)
            .await?;

        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, session: &GameSession) -> Result<(), StoreError> {
        self.write_session(session).await
    }
}

#[async_trait]
impl LeaderboardStore for RedisStore {
    async fn save_score(&self, session: &GameSession) -> Result<LeaderboardEntry, StoreError> {
        let mut conn = self.conn.clone();
        let script = Script::new(scripts::save_score_script());
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let json: String = script
            .key(entries_key(session.difficulty))
            .key(ranking_key(session.difficulty))
            .arg(&session.username)
            .arg(session.total_score)
            .arg(now)
            .arg(session.difficulty.as_str())
            .invoke_async(&mut conn)
            .await?;

        debug!(
            "Leaderboard entry saved for {} ({})",
            session.username, session.difficulty
        );
        Ok(serde_json::from_str(&json)?)
    }

    async fn leaderboard(
        &self,
        difficulty: Option<Difficulty>,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let difficulties = match difficulty {
            Some(d) => vec![d],
            None => Difficulty::ALL.to_vec(),
        };

        let mut conn = self.conn.clone();
        let mut entries = Vec::new();
        for d in difficulties {
            let raw: Vec<String> = ::redis::cmd("HVALS")
                .arg(entries_key(d))
                .query_async(&mut conn)
                .await?;
            for json in raw {
                entries.push(serde_json::from_str::<LeaderboardEntry>(&json)?);
            }
        }

        Ok(rank_entries(entries, limit))
    }

    async fn rank(
        &self,
        username: &str,
        difficulty: Difficulty,
    ) -> Result<Option<u32>, StoreError> {
        let mut conn = self.conn.clone();
        let score: Option<f64> = ::redis::cmd("ZSCORE")
            .arg(ranking_key(difficulty))
            .arg(username)
            .query_async(&mut conn)
            .await?;

        let Some(score) = score else {
            return Ok(None);
        };

        // "(" makes the lower bound exclusive
        let higher: u32 = ::redis::cmd("ZCOUNT")
            .arg(ranking_key(difficulty))
            .arg(format!("({}", score))
            .arg("+inf")
            .query_async(&mut conn)
            .await?;

        Ok(Some(higher + 1))
    }
}
