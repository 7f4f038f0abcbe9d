//! Great-circle helpers shared by the catalog, display and scoring code.

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine distance in kilometres.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial bearing from `from` toward `to`, in degrees within [0, 360).
///
/// Coincident points have no direction and yield 0.
pub fn bearing_degrees(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JFK: Coordinates = Coordinates::new(40.6413, -73.7781);
    const LHR: Coordinates = Coordinates::new(51.4700, -0.4543);

    #[test]
    fn distance_is_symmetric_and_zero_on_identity() {
        assert_eq!(distance_km(JFK, JFK), 0.0);
        let there = distance_km(JFK, LHR);
        let back = distance_km(LHR, JFK);
        assert!((there - back).abs() < 1e-9);
        // JFK-LHR is roughly 5540 km
        assert!((there - 5540.0).abs() < 40.0, "got {there}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Coordinates::new(0.0, 0.0);
        assert!((bearing_degrees(origin, Coordinates::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing_degrees(origin, Coordinates::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((bearing_degrees(origin, Coordinates::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing_degrees(origin, Coordinates::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_of_coincident_points_is_zero() {
        assert_eq!(bearing_degrees(LHR, LHR), 0.0);
    }

    #[test]
    fn bearing_stays_in_range() {
        let b = bearing_degrees(LHR, JFK);
        assert!((0.0..360.0).contains(&b));
        // heading west-north-west out of London
        assert!(b > 270.0 && b < 300.0, "got {b}");
    }
}
