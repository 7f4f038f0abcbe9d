use crate::models::{Difficulty, MatchCategory};

pub struct MetricsCtx;

impl MetricsCtx {
    pub fn new() -> Self {
        Self
    }

    pub fn inc_flight_refresh(&self) {
        metrics::FLIGHT_REFRESH_TOTAL.inc();
    }

    pub fn inc_flight_refresh_failure(&self) {
        metrics::FLIGHT_REFRESH_FAILURES_TOTAL.inc();
    }

    pub fn set_catalog_size(&self, count: usize) {
        metrics::FLIGHT_CATALOG_SIZE.set(count as i64);
    }

    pub fn set_active_viewers(&self, count: usize) {
        metrics::ACTIVE_VIEWERS.set(count as i64);
    }

    pub fn inc_stalled_viewer_dropped(&self) {
        metrics::STALLED_VIEWERS_DROPPED_TOTAL.inc();
    }

    pub fn inc_game_started(&self, difficulty: Difficulty) {
        metrics::GAMES_STARTED_TOTAL
            .with_label_values(&[difficulty.as_str()])
            .inc();
    }

    pub fn inc_game_completed(&self, difficulty: Difficulty) {
        metrics::GAMES_COMPLETED_TOTAL
            .with_label_values(&[difficulty.as_str()])
            .inc();
    }

    pub fn inc_guess(&self, category: MatchCategory) {
        metrics::GUESSES_TOTAL_BY_CATEGORY
            .with_label_values(&[category.as_str()])
            .inc();
    }

    pub fn inc_persistence_degraded(&self) {
        metrics::PERSISTENCE_DEGRADED_TOTAL.inc();
    }

    pub fn inc_leaderboard_write_failure(&self) {
        metrics::LEADERBOARD_WRITE_FAILURES_TOTAL.inc();
    }
}

impl Default for MetricsCtx {
    fn default() -> Self {
        Self::new()
    }
}
