use std::sync::Arc;

use crate::{
    geo::{bearing_degrees, Coordinates},
    hints::CityFacts,
    models::{Airport, Difficulty, DisplayFlight, Flight},
    rng::GameRng,
};

/// Used when the departure airport has no position.
pub const DEFAULT_ORIGIN: Coordinates = Coordinates::new(40.0, -74.0);

const MIN_OFFSET_DEG: f64 = 0.3;
const MAX_OFFSET_DEG: f64 = 1.0;

/// Plausible airborne telemetry near the departure airport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedFix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: f64,
    pub direction: f64,
    pub vertical_speed: f64,
}

/// A point 0.3-1.0 degrees from the origin, heading toward the destination, with
/// cruise-like altitude and speed. Unknown destinations are treated as 5/5 degrees
/// north-east of the origin.
pub fn simulate_fix(rng: &GameRng, departure: &Airport, arrival: &Airport) -> SimulatedFix {
    let origin = departure.coordinates().unwrap_or(DEFAULT_ORIGIN);
    let target = arrival.coordinates().unwrap_or(Coordinates::new(
        origin.latitude + 5.0,
        origin.longitude + 5.0,
    ));

    // 출발 공항 주변 0.3~1.0도 반경의 임의 지점
    let offset = MIN_OFFSET_DEG + rng.unit() * (MAX_OFFSET_DEG - MIN_OFFSET_DEG);
    let angle = rng.unit() * 2.0 * std::f64::consts::PI;
    let shown = Coordinates::new(
        origin.latitude + offset * angle.cos(),
        origin.longitude + offset * angle.sin(),
    );

    SimulatedFix {
        latitude: shown.latitude,
        longitude: shown.longitude,
        altitude: 28000.0 + rng.unit() * 10000.0,
        speed: 420.0 + rng.unit() * 100.0,
        direction: bearing_degrees(shown, target),
        vertical_speed: -500.0 + rng.unit() * 1000.0,
    }
}

/// Builds the masked, jittered view of a flight that a player gets to see.
pub struct DisplayPreparer {
    rng: Arc<GameRng>,
    facts: Arc<CityFacts>,
}

impl DisplayPreparer {
    pub fn new(rng: Arc<GameRng>, facts: Arc<CityFacts>) -> Self {
        Self { rng, facts }
    }

    pub fn prepare(&self, flight: &Flight, difficulty: Difficulty) -> DisplayFlight {
        let fix = simulate_fix(&self.rng, &flight.departure, &flight.arrival);

        let mut display = DisplayFlight {
            id: flight.id.clone(),
            callsign: flight.callsign.clone(),
            flight_number: flight.flight_number.clone(),
            latitude: fix.latitude,
            longitude: fix.longitude,
            altitude: fix.altitude,
            speed: fix.speed,
            direction: fix.direction,
            vertical_speed: fix.vertical_speed,
            status: flight.status.clone(),
            departure: flight.departure.clone(),
            arrival: Airport::masked_destination(),
            aircraft: flight.aircraft.clone(),
            airline: flight.airline.clone(),
            hint: None,
            updated_at: flight.updated_at,
        };

        match difficulty {
            Difficulty::Easy => {
                display.hint = self.facts.fact_for(&flight.id, &flight.arrival.city);
            }
            Difficulty::Medium => {
                display.flight_number.clear();
                display.callsign.clear();
            }
            Difficulty::Hard => {
                display.flight_number.clear();
                display.callsign.clear();
                display.airline = Default::default();
                display.departure = Airport::masked_origin();
            }
        }

        display
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{Aircraft, Airline};

    fn preparer(seed: u64) -> DisplayPreparer {
        let rng = Arc::new(GameRng::seeded(seed));
        DisplayPreparer::new(rng.clone(), Arc::new(CityFacts::new(rng)))
    }

    fn airport(iata: &str, city: &str, lat: f64, lon: f64) -> Airport {
        Airport {
            iata: iata.to_string(),
            icao: format!("K{iata}"),
            name: format!("{city} Airport"),
            city: city.to_string(),
            country: "USA".to_string(),
            latitude: lat,
            longitude: lon,
        }
    }

    fn flight(departure: Airport, arrival: Airport) -> Flight {
        Flight {
            id: "a1b2c3".to_string(),
            icao24: "a1b2c3".to_string(),
            callsign: "DAL123".to_string(),
            latitude: 10.0,
            longitude: 10.0,
            altitude: 1000.0,
            speed: 100.0,
            direction: 5.0,
            vertical_speed: 0.0,
            status: "active".to_string(),
            departure,
            arrival,
            aircraft: Aircraft {
                icao: "B738".to_string(),
                ..Default::default()
            },
            airline: Airline {
                iata: "DL".to_string(),
                icao: "DAL".to_string(),
                name: "Delta".to_string(),
            },
            flight_number: "DL123".to_string(),
            updated_at: Utc::now(),
        }
    }

    fn jfk_to_lax() -> Flight {
        flight(
            airport("JFK", "New York", 40.6413, -73.7781),
            airport("LAX", "Los Angeles", 33.9425, -118.4081),
        )
    }

    #[test]
    fn destination_masked_and_position_near_origin_at_every_difficulty() {
        let preparer = preparer(11);
        let source = jfk_to_lax();
        for difficulty in Difficulty::ALL {
            for _ in 0..50 {
                let shown = preparer.prepare(&source, difficulty);
                assert_eq!(shown.arrival, Airport::masked_destination());
                let d_lat = shown.latitude - 40.6413;
                let d_lon = shown.longitude + 73.7781;
                let offset = (d_lat * d_lat + d_lon * d_lon).sqrt();
                assert!(offset >= 0.3 - 1e-9 && offset <= 1.0 + 1e-9, "offset {offset}");
                assert!((28000.0..=38000.0).contains(&shown.altitude));
                assert!((420.0..=520.0).contains(&shown.speed));
                assert!((-500.0..=500.0).contains(&shown.vertical_speed));
                assert!((0.0..360.0).contains(&shown.direction));
            }
        }
    }

    #[test]
    fn unknown_departure_uses_default_origin() {
        let preparer = preparer(5);
        let source = flight(Airport::unresolved("ZZZ"), Airport::unresolved("YYY"));
        let shown = preparer.prepare(&source, Difficulty::Hard);
        let d_lat = shown.latitude - DEFAULT_ORIGIN.latitude;
        let d_lon = shown.longitude - DEFAULT_ORIGIN.longitude;
        assert!((d_lat * d_lat + d_lon * d_lon).sqrt() <= 1.0 + 1e-9);
    }

    #[test]
    fn easy_keeps_details_and_adds_stable_hint() {
        let preparer = preparer(9);
        let source = jfk_to_lax();
        let first = preparer.prepare(&source, Difficulty::Easy);
        let second = preparer.prepare(&source, Difficulty::Easy);
        assert_eq!(first.flight_number, "DL123");
        assert_eq!(first.callsign, "DAL123");
        assert_eq!(first.departure.iata, "JFK");
        assert!(first.hint.is_some());
        assert_eq!(first.hint, second.hint);
    }

    #[test]
    fn medium_strips_flight_number_and_callsign() {
        let shown = preparer(2).prepare(&jfk_to_lax(), Difficulty::Medium);
        assert!(shown.flight_number.is_empty());
        assert!(shown.callsign.is_empty());
        assert_eq!(shown.airline.name, "Delta");
        assert_eq!(shown.departure.iata, "JFK");
        assert!(shown.hint.is_none());
    }

    #[test]
    fn hard_masks_origin_and_carrier() {
        let shown = preparer(2).prepare(&jfk_to_lax(), Difficulty::Hard);
        assert_eq!(shown.departure, Airport::masked_origin());
        assert_eq!(shown.airline, Airline::default());
        assert!(shown.flight_number.is_empty());
        assert!(shown.callsign.is_empty());
    }

    #[test]
    fn same_seed_same_display() {
        let source = jfk_to_lax();
        let a = preparer(77).prepare(&source, Difficulty::Medium);
        let b = preparer(77).prepare(&source, Difficulty::Medium);
        assert_eq!(a.latitude, b.latitude);
        assert_eq!(a.longitude, b.longitude);
        assert_eq!(a.direction, b.direction);
    }
}
