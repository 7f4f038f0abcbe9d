use lazy_static::lazy_static;
use prometheus::{opts, IntCounter, IntCounterVec, IntGauge, Opts, Registry};

lazy_static! {
    // 레지스트리 등록은 register_custom_metrics 에서 수동으로 수행합니다.

    /// Successful catalog refreshes (provider or cache).
    pub static ref FLIGHT_REFRESH_TOTAL: IntCounter =
        IntCounter::with_opts(opts!("flight_refresh_total", "Total successful flight catalog refreshes")).unwrap();

    /// Refresh attempts that kept the previous catalog.
    pub static ref FLIGHT_REFRESH_FAILURES_TOTAL: IntCounter =
        IntCounter::with_opts(opts!("flight_refresh_failures_total", "Flight refreshes that failed and kept the last good catalog")).unwrap();

    pub static ref FLIGHT_CATALOG_SIZE: IntGauge =
        IntGauge::with_opts(opts!("flight_catalog_size", "Number of flights in the current catalog")).unwrap();

    /// Viewers currently attached to the live feed.
    pub static ref ACTIVE_VIEWERS: IntGauge =
        IntGauge::with_opts(opts!("active_viewers", "Number of live feed connections registered with the hub")).unwrap();

    pub static ref STALLED_VIEWERS_DROPPED_TOTAL: IntCounter =
        IntCounter::with_opts(opts!("stalled_viewers_dropped_total", "Viewers dropped because their outbound queue was full")).unwrap();

    pub static ref GAMES_STARTED_TOTAL: IntCounterVec =
        IntCounterVec::new(Opts::new("games_started_total", "Total games started by difficulty"), &[
            "difficulty",
        ])
        .unwrap();

    pub static ref GAMES_COMPLETED_TOTAL: IntCounterVec =
        IntCounterVec::new(Opts::new("games_completed_total", "Total games completed by difficulty"), &[
            "difficulty",
        ])
        .unwrap();

    pub static ref GUESSES_TOTAL_BY_CATEGORY: IntCounterVec =
        IntCounterVec::new(
            Opts::new("guesses_total_by_category", "Total scored guesses by match category"),
            &["category"],
        )
        .unwrap();

    /// Durable store failures that switched the process to in-memory storage.
    pub static ref PERSISTENCE_DEGRADED_TOTAL: IntCounter =
        IntCounter::with_opts(opts!("persistence_degraded_total", "Times the durable store failed and memory fallback served the call")).unwrap();

    pub static ref LEADERBOARD_WRITE_FAILURES_TOTAL: IntCounter =
        IntCounter::with_opts(opts!("leaderboard_write_failures_total", "Leaderboard writes that failed after a game ended")).unwrap();
}

/// Registers all custom metrics defined in this crate to the given registry.
///
/// Call once during service startup so the collectors are available for scraping.
pub fn register_custom_metrics(registry: &Registry) -> Result<(), prometheus::Error> {
    registry.register(Box::new(FLIGHT_REFRESH_TOTAL.clone()))?;
    registry.register(Box::new(FLIGHT_REFRESH_FAILURES_TOTAL.clone()))?;
    registry.register(Box::new(FLIGHT_CATALOG_SIZE.clone()))?;
    registry.register(Box::new(ACTIVE_VIEWERS.clone()))?;
    registry.register(Box::new(STALLED_VIEWERS_DROPPED_TOTAL.clone()))?;
    registry.register(Box::new(GAMES_STARTED_TOTAL.clone()))?;
    registry.register(Box::new(GAMES_COMPLETED_TOTAL.clone()))?;
    registry.register(Box::new(GUESSES_TOTAL_BY_CATEGORY.clone()))?;
    registry.register(Box::new(PERSISTENCE_DEGRADED_TOTAL.clone()))?;
    registry.register(Box::new(LEADERBOARD_WRITE_FAILURES_TOTAL.clone()))?;
    Ok(())
}
