use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info};

use super::FlightProvider;
use crate::{
    env::FlightSettings,
    errors::ProviderError,
    models::{Aircraft, Airline, Airport, Flight},
};

// --- AviationStack 응답 구조체 ---

#[derive(Debug, Deserialize)]
struct FlightsResponse {
    #[serde(default)]
    data: Vec<RawFlight>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFlight {
    flight_status: Option<String>,
    departure: RawEndpoint,
    arrival: RawEndpoint,
    airline: RawAirline,
    flight: RawFlightCode,
    aircraft: Option<RawAircraft>,
    live: Option<RawLive>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEndpoint {
    airport: Option<String>,
    iata: Option<String>,
    icao: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAirline {
    name: Option<String>,
    iata: Option<String>,
    icao: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFlightCode {
    iata: Option<String>,
    icao: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAircraft {
    registration: Option<String>,
    iata: Option<String>,
    icao: Option<String>,
    icao24: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLive {
    latitude: f64,
    longitude: f64,
    altitude: f64,
    direction: f64,
    speed_horizontal: f64,
    speed_vertical: f64,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// AviationStack `/flights` client.
pub struct AviationStackProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    limit: u32,
}

impl AviationStackProvider {
    pub fn new(settings: &FlightSettings) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            limit: settings.fetch_limit,
        })
    }
}

#[async_trait]
impl FlightProvider for AviationStackProvider {
    async fn fetch(&self) -> Result<Vec<Flight>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let limit = self.limit.to_string();
        let response = self
            .client
            .get(format!("{}/flights", self.base_url))
            .query(&[
                ("access_key", self.api_key.as_str()),
                ("flight_status", "active"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body = response.json::<FlightsResponse>().await?;
        let received = body.data.len();
        let flights = convert_flights(body.data);
        info!(
            "Fetched {} flights from AviationStack ({} usable)",
            received,
            flights.len()
        );
        Ok(flights)
    }
}

fn convert_flights(raw: Vec<RawFlight>) -> Vec<Flight> {
    let now = Utc::now();
    raw.into_iter()
        .filter_map(|r| {
            let departure_iata = r.departure.iata.clone().filter(|s| !s.is_empty());
            let arrival_iata = r.arrival.iata.clone().filter(|s| !s.is_empty());
            let (Some(departure_iata), Some(arrival_iata)) = (departure_iata, arrival_iata) else {
                debug!("Skipping flight without departure/arrival code");
                return None;
            };

            let flight_iata = text(&r.flight.iata);
            let icao24 = r
                .aircraft
                .as_ref()
                .map(|a| text(&a.icao24))
                .unwrap_or_default();
            let id = if !icao24.is_empty() {
                icao24.clone()
            } else if !flight_iata.is_empty() {
                flight_iata.clone()
            } else {
                format!("{}-{}-{}", flight_iata, departure_iata, arrival_iata)
            };

            let aircraft = r
                .aircraft
                .as_ref()
                .map(|a| Aircraft {
                    iata: text(&a.iata),
                    icao: text(&a.icao),
                    model: String::new(),
                    registration: text(&a.registration),
                })
                .unwrap_or_default();

            let mut flight = Flight {
                id,
                icao24,
                callsign: text(&r.flight.icao),
                latitude: 0.0,
                longitude: 0.0,
                altitude: 0.0,
                speed: 0.0,
                direction: 0.0,
                vertical_speed: 0.0,
                status: text(&r.flight_status),
                departure: Airport {
                    iata: departure_iata,
                    icao: text(&r.departure.icao),
                    name: text(&r.departure.airport),
                    ..Default::default()
                },
                arrival: Airport {
                    iata: arrival_iata,
                    icao: text(&r.arrival.icao),
                    name: text(&r.arrival.airport),
                    ..Default::default()
                },
                aircraft,
                airline: Airline {
                    iata: text(&r.airline.iata),
                    icao: text(&r.airline.icao),
                    name: text(&r.airline.name),
                },
                flight_number: flight_iata,
                updated_at: now,
            };

            if let Some(live) = r.live {
                flight.latitude = live.latitude;
                flight.longitude = live.longitude;
                flight.altitude = live.altitude;
                flight.direction = live.direction;
                flight.speed = live.speed_horizontal;
                flight.vertical_speed = live.speed_vertical;
            }

            Some(flight)
        })
        .collect()
}
