use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use tracing::{error, warn};
use uuid::Uuid;

use super::{LeaderboardStore, MemoryStore, SessionStore};
use crate::{
    errors::StoreError,
    metrics::MetricsCtx,
    models::{Difficulty, GameSession, LeaderboardEntry},
};

/// Durable store with a one-way switch to memory.
///
/// The first failure of the primary flips `degraded` and every later call, from
/// any caller, goes to the in-memory store for the rest of the process. Sessions
/// written to the primary are mirrored in memory so games in flight survive the
/// switch.
pub struct FallbackStore<P> {
    primary: Option<P>,
    memory: MemoryStore,
    degraded: AtomicBool,
    metrics: Arc<MetricsCtx>,
}

impl<P> FallbackStore<P>
where
    P: SessionStore + LeaderboardStore,
{
    pub fn new(primary: Option<P>, metrics: Arc<MetricsCtx>) -> Self {
        if primary.is_none() {
            warn!("No durable store configured, sessions and scores are kept in memory");
        }
        Self {
            degraded: AtomicBool::new(primary.is_none()),
            primary,
            memory: MemoryStore::new(),
            metrics,
        }
    }

    pub fn memory_only(metrics: Arc<MetricsCtx>) -> Self {
        Self::new(None, metrics)
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Acquire)
    }

    fn active_primary(&self) -> Option<&P> {
        if self.is_degraded() {
            None
        } else {
            self.primary.as_ref()
        }
    }

    fn degrade(&self, operation: &str, err: &StoreError) {
        if !self.degraded.swap(true, Ordering::AcqRel) {
            error!(
                "Durable store failed during {}: {}. Switching to in-memory storage",
                operation, err
            );
        } else {
            warn!("Durable store failed during {}: {}", operation, err);
        }
        self.metrics.inc_persistence_degraded();
    }
}

#[async_trait]
impl<P> SessionStore for FallbackStore<P>
where
    P: SessionStore + LeaderboardStore,
{
    async fn create(&self, session: &GameSession) -> Result<(), StoreError> {
        if let Some(primary) = self.active_primary() {
            match primary.create(session).await {
                Ok(()) => return self.memory.create(session).await,
                Err(e) => self.degrade("session create", &e),
            }
        }
        self.memory.create(session).await
    }

    async fn get(&self, session_id: Uuid) -> Result<Option<GameSession>, StoreError> {
        if let Some(primary) = self.active_primary() {
            match primary.get(session_id).await {
                Ok(found) => return Ok(found),
                Err(e) => self.degrade("session get", &e),
            }
        }
        self.memory.get(session_id).await
    }

    async fn update(&self, session: &GameSession) -> Result<(), StoreError> {
        if let Some(primary) = self.active_primary() {
            match primary.update(session).await {
                Ok(()) => return self.memory.update(session).await,
                Err(e) => self.degrade("session update", &e),
            }
        }
        self.memory.update(session).await
    }
}

#[async_trait]
impl<P> LeaderboardStore for FallbackStore<P>
where
    P: SessionStore + LeaderboardStore,
{
    async fn save_score(&self, session: &GameSession) -> Result<LeaderboardEntry, StoreError> {
        if let Some(primary) = self.active_primary() {
            match primary.save_score(session).await {
                Ok(entry) => return Ok(entry),
                Err(e) => self.degrade("save score", &e),
            }
        }
        self.memory.save_score(session).await
    }

    async fn leaderboard(
        &self,
        difficulty: Option<Difficulty>,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        if let Some(primary) = self.active_primary() {
            match primary.leaderboard(difficulty, limit).await {
                Ok(entries) => return Ok(entries),
                Err(e) => self.degrade("leaderboard", &e),
            }
        }
        self.memory.leaderboard(difficulty, limit).await
    }

    async fn rank(
        &self,
        username: &str,
        difficulty: Difficulty,
    ) -> Result<Option<u32>, StoreError> {
        if let Some(primary) = self.active_primary() {
            match primary.rank(username, difficulty).await {
                Ok(rank) => return Ok(rank),
                Err(e) => self.degrade("rank", &e),
            }
        }
        self.memory.rank(username, difficulty).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use chrono::Utc;

    use super::*;
    use crate::models::SessionStatus;

    /// Fails every call and counts how often it was tried.
    #[derive(Default)]
    struct BrokenStore {
        calls: AtomicUsize,
    }

    impl BrokenStore {
        fn fail(&self) -> StoreError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            StoreError::Serialization(serde_json::from_str::<u8>("x").unwrap_err())
        }
    }

    #[async_trait]
    impl SessionStore for BrokenStore {
        async fn create(&self, _: &GameSession) -> Result<(), StoreError> {
            Err(self.fail())
        }
        async fn get(&self, _: Uuid) -> Result<Option<GameSession>, StoreError> {
            Err(self.fail())
        }
        async fn update(&self, _: &GameSession) -> Result<(), StoreError> {
            Err(self.fail())
        }
    }

    #[async_trait]
    impl LeaderboardStore for BrokenStore {
        async fn save_score(&self, _: &GameSession) -> Result<LeaderboardEntry, StoreError> {
            Err(self.fail())
        }
        async fn leaderboard(
            &self,
            _: Option<Difficulty>,
            _: usize,
        ) -> Result<Vec<LeaderboardEntry>, StoreError> {
            Err(self.fail())
        }
        async fn rank(&self, _: &str, _: Difficulty) -> Result<Option<u32>, StoreError> {
            Err(self.fail())
        }
    }

    /// Healthy until `down` is set, then fails every call.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        down: AtomicBool,
    }

    impl FlakyStore {
        fn check(&self) -> Result<(), StoreError> {
            if self.down.load(Ordering::SeqCst) {
                Err(StoreError::Serialization(
                    serde_json::from_str::<u8>("x").unwrap_err(),
                ))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl SessionStore for FlakyStore {
        async fn create(&self, s: &GameSession) -> Result<(), StoreError> {
            self.check()?;
            self.inner.create(s).await
        }
        async fn get(&self, id: Uuid) -> Result<Option<GameSession>, StoreError> {
            self.check()?;
            self.inner.get(id).await
        }
        async fn update(&self, s: &GameSession) -> Result<(), StoreError> {
            self.check()?;
            self.inner.update(s).await
        }
    }

    #[async_trait]
    impl LeaderboardStore for FlakyStore {
        async fn save_score(&self, s: &GameSession) -> Result<LeaderboardEntry, StoreError> {
            self.check()?;
            self.inner.save_score(s).await
        }
        async fn leaderboard(
            &self,
            d: Option<Difficulty>,
            limit: usize,
        ) -> Result<Vec<LeaderboardEntry>, StoreError> {
            self.check()?;
            self.inner.leaderboard(d, limit).await
        }
        async fn rank(&self, u: &str, d: Difficulty) -> Result<Option<u32>, StoreError> {
            self.check()?;
            self.inner.rank(u, d).await
        }
    }

    fn session() -> GameSession {
        GameSession {
            session_id: Uuid::new_v4(),
            username: "pilot".to_string(),
            difficulty: Difficulty::Easy,
            started_at: Utc::now(),
            ended_at: None,
            total_score: 10,
            rounds: Vec::new(),
            status: SessionStatus::InProgress,
            recorded: false,
        }
    }

    #[tokio::test]
    async fn first_failure_switches_to_memory_for_good() {
        let store = FallbackStore::new(
            Some(BrokenStore::default()),
            Arc::new(MetricsCtx::new()),
        );
        assert!(!store.is_degraded());

        let session = session();
        store.create(&session).await.unwrap();
        assert!(store.is_degraded());

        // served from memory, primary not consulted again
        let loaded = store.get(session.session_id).await.unwrap().unwrap();
        assert_eq!(loaded.username, "pilot");
        store.save_score(&session).await.unwrap();
        assert_eq!(store.rank("pilot", Difficulty::Easy).await.unwrap(), Some(1));
        assert_eq!(
            store.primary.as_ref().unwrap().calls.load(Ordering::SeqCst),
            1
        );
    }

    #[tokio::test]
    async fn sessions_written_before_an_outage_are_still_found() {
        let store = FallbackStore::new(Some(FlakyStore::default()), Arc::new(MetricsCtx::new()));

        let mut session = session();
        store.create(&session).await.unwrap();
        session.total_score = 250;
        store.update(&session).await.unwrap();
        assert!(!store.is_degraded());

        store.primary.as_ref().unwrap().down.store(true, Ordering::SeqCst);

        let loaded = store.get(session.session_id).await.unwrap().unwrap();
        assert!(store.is_degraded());
        assert_eq!(loaded.total_score, 250);

        session.total_score = 400;
        store.update(&session).await.unwrap();
        let loaded = store.get(session.session_id).await.unwrap().unwrap();
        assert_eq!(loaded.total_score, 400);
    }

    #[tokio::test]
    async fn memory_only_starts_degraded() {
        let store: FallbackStore<MemoryStore> =
            FallbackStore::memory_only(Arc::new(MetricsCtx::new()));
        assert!(store.is_degraded());
        let session = session();
        store.create(&session).await.unwrap();
        assert!(store.get(session.session_id).await.unwrap().is_some());
    }
}
