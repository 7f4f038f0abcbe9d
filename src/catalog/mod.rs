use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use tracing::debug;

use crate::{
    display::simulate_fix,
    geo::distance_km,
    models::{Airport, Difficulty, Flight},
    rng::GameRng,
};

pub mod airports;

/// Medium difficulty only keeps routes up to this length.
pub const MEDIUM_MAX_ROUTE_KM: f64 = 5000.0;

const AIRPORT_NAME_SUFFIXES: [&str; 5] = [
    " International",
    " Airport",
    " Intl",
    " Regional",
    " Municipal",
];

/// Current flight set plus the static airport reference table.
///
/// The flight set is swapped as a whole `Arc`, so a reader holds either the
/// old or the new snapshot and never a mix of both.
pub struct FlightCatalog {
    flights: RwLock<Arc<Vec<Flight>>>,
    airports: HashMap<String, Airport>,
    rng: Arc<GameRng>,
}

impl FlightCatalog {
    pub fn new(rng: Arc<GameRng>) -> Self {
        Self::with_airports(airports::reference_airports(), rng)
    }

    pub fn with_airports(airports: Vec<Airport>, rng: Arc<GameRng>) -> Self {
        let airports = airports
            .into_iter()
            .map(|airport| (airport.iata.clone(), airport))
            .collect();

        Self {
            flights: RwLock::new(Arc::new(Vec::new())),
            airports,
            rng,
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<Flight>> {
        self.flights.read().clone()
    }

    pub fn len(&self) -> usize {
        self.flights.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn replace(&self, flights: Vec<Flight>) {
        let count = flights.len();
        *self.flights.write() = Arc::new(flights);
        debug!("Flight catalog replaced with {} flights", count);
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    /// Reference airports ordered by code.
    pub fn airports(&self) -> Vec<Airport> {
        let mut list: Vec<Airport> = self.airports.values().cloned().collect();
        list.sort_by(|a, b| a.iata.cmp(&b.iata));
        list
    }

    pub fn flights_for(&self, difficulty: Difficulty) -> Vec<Flight> {
        self.snapshot()
            .iter()
            .filter(|flight| matches_difficulty(flight, difficulty))
            .cloned()
            .collect()
    }

    /// `n` flights from the difficulty pool. Empty when the pool is empty.
    pub fn random_sample(&self, difficulty: Difficulty, n: usize) -> Vec<Flight> {
        self.sample_from(self.flights_for(difficulty), n)
    }

    /// Shuffles `pool` and takes `n`, wrapping around when the pool is short.
    pub fn sample_from(&self, mut pool: Vec<Flight>, n: usize) -> Vec<Flight> {
        if pool.is_empty() {
            return Vec::new();
        }
        self.rng.shuffle(&mut pool);
        (0..n).map(|i| pool[i % pool.len()].clone()).collect()
    }

    /// Swaps provider airports for reference entries where the code is known, then
    /// places the flight near its departure with simulated telemetry. Provider
    /// positions are never kept, so the live feed cannot retrace a real route.
    pub fn enrich(&self, flights: Vec<Flight>) -> Vec<Flight> {
        flights
            .into_iter()
            .map(|mut flight| {
                if let Some(airport) = self.airport(&flight.departure.iata) {
                    flight.departure = airport.clone();
                }
                match self.airport(&flight.arrival.iata) {
                    Some(airport) => flight.arrival = airport.clone(),
                    None => {
                        if flight.arrival.city.is_empty() && !flight.arrival.name.is_empty() {
                            flight.arrival.city = city_from_airport_name(&flight.arrival.name);
                        }
                    }
                }
                let fix = simulate_fix(&self.rng, &flight.departure, &flight.arrival);
                flight.latitude = fix.latitude;
                flight.longitude = fix.longitude;
                flight.altitude = fix.altitude;
                flight.speed = fix.speed;
                flight.direction = fix.direction;
                flight.vertical_speed = fix.vertical_speed;
                flight
            })
            .collect()
    }
}

/// Easy needs a known shared country, Medium a known route of at most 5000 km.
pub fn matches_difficulty(flight: &Flight, difficulty: Difficulty) -> bool {
    match difficulty {
        Difficulty::Easy => {
            !flight.departure.country.is_empty()
                && flight.departure.country == flight.arrival.country
        }
        Difficulty::Medium => match (
            flight.departure.coordinates(),
            flight.arrival.coordinates(),
        ) {
            (Some(from), Some(to)) => distance_km(from, to) <= MEDIUM_MAX_ROUTE_KM,
            _ => false,
        },
        Difficulty::Hard => true,
    }
}

/// "Chhatrapati Shivaji International Airport" -> "Chhatrapati Shivaji"
pub fn city_from_airport_name(name: &str) -> String {
    let mut city = name.to_string();
    for suffix in AIRPORT_NAME_SUFFIXES {
        city = city.replace(suffix, "");
    }
    city.trim().to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::Utc;

    use super::*;
    use crate::display::DEFAULT_ORIGIN;

    pub(crate) fn flight_between(catalog: &FlightCatalog, id: &str, from: &str, to: &str) -> Flight {
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
            icao24: String::new(),
            callsign: format!("CS{id}"),
            latitude: departure.latitude,
            longitude: departure.longitude,
            altitude: 35000.0,
            speed: 450.0,
            direction: 90.0,
            vertical_speed: 0.0,
            status: "active".to_string(),
            departure,
            arrival,
            aircraft: Default::default(),
            airline: Default::default(),
            flight_number: format!("FN{id}"),
            updated_at: Utc::now(),
        }
    }

    fn catalog() -> FlightCatalog {
        FlightCatalog::new(Arc::new(GameRng::seeded(42)))
    }

    #[test]
    fn difficulty_filters() {
        let catalog = catalog();
        let domestic = flight_between(&catalog, "1", "JFK", "LAX");
        let short_hop = flight_between(&catalog, "2", "LHR", "CDG");
        let long_haul = flight_between(&catalog, "3", "JFK", "SYD");
        catalog.replace(vec![domestic, short_hop, long_haul]);

        let easy: Vec<String> = catalog.flights_for(Difficulty::Easy).into_iter().map(|f| f.id).collect();
        let medium: Vec<String> = catalog.flights_for(Difficulty::Medium).into_iter().map(|f| f.id).collect();
        assert_eq!(easy, vec!["1"]);
        // JFK-LAX is ~3980 km, LHR-CDG ~350 km
        assert_eq!(medium, vec!["1", "2"]);
        assert_eq!(catalog.flights_for(Difficulty::Hard).len(), 3);
    }

    #[test]
    fn blank_countries_are_not_treated_as_domestic() {
        // two airports with no known country would compare equal; Easy rejects them
        let catalog = catalog();
        catalog.replace(vec![flight_between(&catalog, "x", "AAA", "BBB")]);
        assert!(catalog.flights_for(Difficulty::Easy).is_empty());
        assert!(catalog.flights_for(Difficulty::Medium).is_empty());
        assert_eq!(catalog.flights_for(Difficulty::Hard).len(), 1);
    }

    #[test]
    fn sample_pads_short_pool_by_wrapping() {
        let catalog = catalog();
        catalog.replace(vec![
            flight_between(&catalog, "a", "JFK", "LAX"),
            flight_between(&catalog, "b", "SFO", "ORD"),
            flight_between(&catalog, "c", "MIA", "BOS"),
        ]);

        let sample = catalog.random_sample(Difficulty::Easy, 10);
        assert_eq!(sample.len(), 10);
        assert!(sample.iter().all(|f| ["a", "b", "c"].contains(&f.id.as_str())));
        // the first three are a permutation of the pool
        let mut head: Vec<&str> = sample[..3].iter().map(|f| f.id.as_str()).collect();
        head.sort();
        assert_eq!(head, vec!["a", "b", "c"]);
    }

    #[test]
    fn sample_of_empty_pool_is_empty() {
        assert!(catalog().random_sample(Difficulty::Hard, 10).is_empty());
    }

    #[test]
    fn replace_swaps_whole_snapshot() {
        let catalog = catalog();
        catalog.replace(vec![flight_between(&catalog, "old", "JFK", "LAX")]);
        let before = catalog.snapshot();
        catalog.replace(vec![
            flight_between(&catalog, "n1", "JFK", "LAX"),
            flight_between(&catalog, "n2", "JFK", "LAX"),
        ]);
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].id, "old");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn enrich_uses_reference_airports_and_derives_unknown_city() {
        let catalog = catalog();
        let mut raw = flight_between(&catalog, "r", "XXX", "YYY");
        raw.departure = Airport::unresolved("LHR");
        raw.arrival = Airport {
            name: "Springfield Regional Airport".to_string(),
            ..Airport::unresolved("SGF")
        };

        let enriched = catalog.enrich(vec![raw]).remove(0);
        assert_eq!(enriched.departure.city, "London");
        assert_eq!(enriched.arrival.city, "Springfield");
        assert_eq!(enriched.arrival.iata, "SGF");
    }

    #[test]
    fn enrich_replaces_provider_telemetry_near_departure() {
        let catalog = catalog();
        let mut known = flight_between(&catalog, "k", "JFK", "LAX");
        known.latitude = 0.0;
        known.longitude = 0.0;
        known.altitude = 0.0;
        known.speed = 0.0;
        let unknown = flight_between(&catalog, "u", "QQQ", "WWW");

        let enriched = catalog.enrich(vec![known, unknown]);
        for flight in &enriched {
            assert!(flight.latitude != 0.0 || flight.longitude != 0.0);
            assert!((28000.0..=38000.0).contains(&flight.altitude));
            assert!((420.0..=520.0).contains(&flight.speed));
        }

        let jfk = catalog.airport("JFK").unwrap();
        let d_lat = enriched[0].latitude - jfk.latitude;
        let d_lon = enriched[0].longitude - jfk.longitude;
        assert!((d_lat * d_lat + d_lon * d_lon).sqrt() <= 1.0 + 1e-9);

        let d_lat = enriched[1].latitude - DEFAULT_ORIGIN.latitude;
        let d_lon = enriched[1].longitude - DEFAULT_ORIGIN.longitude;
        assert!((d_lat * d_lat + d_lon * d_lon).sqrt() <= 1.0 + 1e-9);
    }

    #[test]
    fn city_from_name_strips_suffixes() {
        assert_eq!(city_from_airport_name("Denver International Airport"), "Denver");
        assert_eq!(city_from_airport_name("Boise Municipal"), "Boise");
        assert_eq!(city_from_airport_name("Lisbon"), "Lisbon");
    }
}
