use std::{collections::HashSet, sync::Arc, time::Duration};

use tracing::{debug, info, warn};

use crate::{
    cache::FlightCache,
    catalog::FlightCatalog,
    errors::{GameError, GameResult, ProviderError},
    hints::CityFacts,
    metrics::MetricsCtx,
    models::{Difficulty, Flight, FlightPosition},
    provider::FlightProvider,
};

pub mod poller;

pub use poller::spawn_flight_poller;

/// Keeps the catalog fed from cache and provider, and hands out game samples.
pub struct FlightService {
    catalog: Arc<FlightCatalog>,
    provider: Arc<dyn FlightProvider>,
    cache: Option<Arc<dyn FlightCache>>,
    cache_ttl: Duration,
    metrics: Arc<MetricsCtx>,
    facts: Option<Arc<CityFacts>>,
}

impl FlightService {
    pub fn new(
        catalog: Arc<FlightCatalog>,
        provider: Arc<dyn FlightProvider>,
        cache: Option<Arc<dyn FlightCache>>,
        cache_ttl: Duration,
        metrics: Arc<MetricsCtx>,
    ) -> Self {
        Self {
            catalog,
            provider,
            cache,
            cache_ttl,
            metrics,
            facts: None,
        }
    }

    /// Prunes `facts` of flights that left the catalog on every refresh.
    pub fn with_fact_cache(mut self, facts: Arc<CityFacts>) -> Self {
        self.facts = Some(facts);
        self
    }

    pub fn catalog(&self) -> &Arc<FlightCatalog> {
        &self.catalog
    }

    /// Best-effort load. Failures are logged and leave the catalog as it was.
    pub async fn load_initial(&self) {
        match self.refresh().await {
            Ok(count) => info!("Flight catalog loaded with {} flights", count),
            Err(e) => warn!("Initial flight load failed: {}", e),
        }
    }

    /// Pulls a fresh list and swaps it in. On error the last good catalog stays.
    pub async fn refresh(&self) -> Result<usize, ProviderError> {
        match self.fetch_fresh().await {
            Ok(flights) if flights.is_empty() => {
                warn!(
                    "Flight source returned no flights, keeping {} cached",
                    self.catalog.len()
                );
                Ok(self.catalog.len())
            }
            Ok(flights) => {
                let count = flights.len();
                let previous = self.catalog.snapshot();
                self.catalog.replace(flights);
                self.prune_facts(&previous);
                self.metrics.set_catalog_size(count);
                self.metrics.inc_flight_refresh();
                Ok(count)
            }
            Err(e) => {
                self.metrics.inc_flight_refresh_failure();
                Err(e)
            }
        }
    }

    // 직전 카탈로그의 항공편은 진행 중인 라운드가 참조할 수 있으므로 한 세대 유지
    fn prune_facts(&self, previous: &[Flight]) {
        let Some(facts) = &self.facts else {
            return;
        };
        let current = self.catalog.snapshot();
        let live: HashSet<&str> = previous
            .iter()
            .chain(current.iter())
            .map(|f| f.id.as_str())
            .collect();
        let before = facts.cache().len();
        facts.cache().retain_flights(|id| live.contains(id));
        debug!(
            "Fact cache pruned from {} to {} entries",
            before,
            facts.cache().len()
        );
    }

    async fn fetch_fresh(&self) -> Result<Vec<Flight>, ProviderError> {
        if let Some(cache) = &self.cache {
            match cache.get().await {
                Ok(Some(flights)) if !flights.is_empty() => {
                    debug!("Using {} cached flights", flights.len());
                    return Ok(flights);
                }
                Ok(_) => debug!("Flight cache miss"),
                Err(e) => warn!("Flight cache read failed: {}", e),
            }
        }

        let flights = self.catalog.enrich(self.provider.fetch().await?);

        if let Some(cache) = &self.cache {
            if !flights.is_empty() {
                if let Err(e) = cache.set(&flights, self.cache_ttl).await {
                    warn!("Flight cache write failed: {}", e);
                }
            }
        }

        Ok(flights)
    }

    /// Exactly `n` flights for a new game.
    ///
    /// Tries the difficulty pool, then the whole catalog, then one synchronous
    /// reload before giving up with `NoFlightsAvailable`.
    pub async fn sample_for_game(&self, difficulty: Difficulty, n: usize) -> GameResult<Vec<Flight>> {
        if let Some(flights) = self.sample_with_fallback(difficulty, n) {
            return Ok(flights);
        }

        warn!("Flight catalog is empty, attempting a reload");
        self.load_initial().await;

        self.sample_with_fallback(difficulty, n)
            .ok_or(GameError::NoFlightsAvailable)
    }

    fn sample_with_fallback(&self, difficulty: Difficulty, n: usize) -> Option<Vec<Flight>> {
        let filtered = self.catalog.random_sample(difficulty, n);
        if !filtered.is_empty() {
            return Some(filtered);
        }

        let all = self.catalog.snapshot().to_vec();
        if all.is_empty() {
            return None;
        }
        debug!(
            "No flights match {}, sampling from all {} flights",
            difficulty,
            all.len()
        );
        Some(self.catalog.sample_from(all, n))
    }

    /// Live positions for the feed and the flights listing. Never carries airports.
    pub fn positions(&self, difficulty: Option<Difficulty>, limit: Option<usize>) -> Vec<FlightPosition> {
        let source: Vec<Flight> = match difficulty {
            Some(d) => self.catalog.flights_for(d),
            None => self.catalog.snapshot().to_vec(),
        };
        source
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(FlightPosition::from)
            .collect()
    }
}
