#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use skyquest_server::{
    catalog::FlightCatalog,
    display::DisplayPreparer,
    flights::FlightService,
    hints::CityFacts,
    metrics::MetricsCtx,
    models::{Airport, Flight},
    provider::StaticFlightProvider,
    rng::GameRng,
    scoring::ScoringEngine,
    session::{SessionEngine, SessionEngineDeps},
    store::MemoryStore,
};

pub fn route(catalog: &FlightCatalog, id: &str, from: &str, to: &str) -> Flight {
    let departure = catalog
        .airport(from)
        .cloned()
        .unwrap_or_else(|| Airport::unresolved(from));
    let arrival = catalog
        .airport(to)
        .cloned()
        .unwrap_or_else(|| Airport::unresolved(to));
    Flight {
        id: id.to_string(),
        icao24: format!("abc{id}"),
        callsign: format!("TST{id}"),
        latitude: departure.latitude,
        longitude: departure.longitude,
        altitude: 35000.0,
        speed: 460.0,
        direction: 0.0,
        vertical_speed: 0.0,
        status: "active".to_string(),
        departure,
        arrival,
        aircraft: Default::default(),
        airline: Default::default(),
        flight_number: format!("TS{id}"),
        updated_at: Utc::now(),
    }
}

pub struct Harness {
    pub catalog: Arc<FlightCatalog>,
    pub flights: Arc<FlightService>,
    pub store: Arc<MemoryStore>,
    pub engine: Arc<SessionEngine>,
}

/// Engine over an in-memory store with a catalog holding the given routes.
pub fn harness(routes: &[(&str, &str)], total_rounds: usize, seed: u64) -> Harness {
    let rng = Arc::new(GameRng::seeded(seed));
    let catalog = Arc::new(FlightCatalog::new(rng.clone()));
    let flights = routes
        .iter()
        .enumerate()
        .map(|(i, (from, to))| route(&catalog, &format!("{i}"), from, to))
        .collect();
    catalog.replace(flights);

    let metrics = Arc::new(MetricsCtx::new());
    let service = Arc::new(FlightService::new(
        catalog.clone(),
        Arc::new(StaticFlightProvider::default()),
        None,
        Duration::from_secs(300),
        metrics.clone(),
    ));
    let store = Arc::new(MemoryStore::new());
    let engine = Arc::new(SessionEngine::new(SessionEngineDeps {
        flights: service.clone(),
        display: Arc::new(DisplayPreparer::new(
            rng.clone(),
            Arc::new(CityFacts::new(rng)),
        )),
        scoring: ScoringEngine::new(catalog.clone()),
        sessions: store.clone(),
        leaderboard: store.clone(),
        notifier: None,
        metrics,
        total_rounds,
    }));

    Harness {
        catalog,
        flights: service,
        store,
        engine,
    }
}
