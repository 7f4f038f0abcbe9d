use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::GameError, geo::Coordinates};

pub const MASKED_IATA: &str = "???";
pub const MASKED_ICAO: &str = "????";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Domestic flights, full flight info plus a destination hint.
    Easy,
    /// Routes up to 5000 km, flight number and callsign hidden.
    Medium,
    /// Any route, origin and carrier hidden too.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::invalid_difficulty(other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Airport {
    pub iata: String,
    pub icao: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn masked_destination() -> Self {
        Self::masked("Unknown Destination")
    }

    pub fn masked_origin() -> Self {
        Self::masked("Unknown Origin")
    }

    fn masked(name: &str) -> Self {
        Self {
            iata: MASKED_IATA.to_string(),
            icao: MASKED_ICAO.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// An airport known only by its short code.
    pub fn unresolved(code: &str) -> Self {
        Self {
            iata: code.to_string(),
            ..Self::default()
        }
    }

    pub fn is_masked(&self) -> bool {
        self.iata.is_empty() || self.iata == MASKED_IATA
    }

    /// `None` when the provider left the position at (0, 0).
    pub fn coordinates(&self) -> Option<Coordinates> {
        if self.latitude == 0.0 && self.longitude == 0.0 {
            None
        } else {
            Some(Coordinates::new(self.latitude, self.longitude))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Aircraft {
    pub iata: String,
    pub icao: String,
    pub model: String,
    pub registration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Airline {
    pub iata: String,
    pub icao: String,
    pub name: String,
}

/// A catalog entry as reported by the provider, after enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    #[serde(default)]
    pub icao24: String,
    #[serde(default)]
    pub callsign: String,
    pub latitude: f64,
    pub longitude: f64,
    /// feet
    pub altitude: f64,
    /// knots
    pub speed: f64,
    pub direction: f64,
    /// feet per minute
    pub vertical_speed: f64,
    #[serde(default)]
    pub status: String,
    pub departure: Airport,
    pub arrival: Airport,
    #[serde(default)]
    pub aircraft: Aircraft,
    #[serde(default)]
    pub airline: Airline,
    #[serde(default)]
    pub flight_number: String,
    pub updated_at: DateTime<Utc>,
}

/// Player-visible view of a flight. Rebuilt on every reveal, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFlight {
    pub id: String,
    pub callsign: String,
    pub flight_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: f64,
    pub direction: f64,
    pub vertical_speed: f64,
    pub status: String,
    pub departure: Airport,
    pub arrival: Airport,
    pub aircraft: Aircraft,
    pub airline: Airline,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Position-only entry of the live feed snapshot. Carries no airports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPosition {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: f64,
    pub direction: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<&Flight> for FlightPosition {
    fn from(flight: &Flight) -> Self {
        Self {
            id: flight.id.clone(),
            latitude: flight.latitude,
            longitude: flight.longitude,
            altitude: flight.altitude,
            speed: flight.speed,
            direction: flight.direction,
            updated_at: flight.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchCategory {
    Exact,
    Family,
    Country,
    Distance,
    Wrong,
}

impl MatchCategory {
    pub fn base_points(self) -> u32 {
        match self {
            MatchCategory::Exact => 1000,
            MatchCategory::Family => 750,
            MatchCategory::Country => 500,
            MatchCategory::Distance => 250,
            MatchCategory::Wrong => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchCategory::Exact => "exact",
            MatchCategory::Family => "family",
            MatchCategory::Country => "country",
            MatchCategory::Distance => "distance",
            MatchCategory::Wrong => "wrong",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub base_points: u32,
    pub difficulty_multiplier: f64,
    pub speed_multiplier: f64,
    pub total_points: u32,
    pub match_type: MatchCategory,
    pub distance_km: f64,
    pub correct_airport: Airport,
    pub guessed_airport: Airport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: u32,
    pub flight_id: String,
    pub flight: Flight,
    pub departure: String,
    pub actual_arrival: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_guess: Option<String>,
    pub points_earned: u32,
    /// seconds
    pub guess_time: f64,
    pub confidence: i32,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Round {
    pub fn new(round_number: u32, flight: Flight, started_at: DateTime<Utc>) -> Self {
        Self {
            round_number,
            flight_id: flight.id.clone(),
            departure: flight.departure.iata.clone(),
            actual_arrival: flight.arrival.iata.clone(),
            flight,
            player_guess: None,
            points_earned: 0,
            guess_time: 0.0,
            confidence: 0,
            started_at,
            completed_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.player_guess.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub session_id: Uuid,
    pub username: String,
    pub difficulty: Difficulty,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    pub total_score: u32,
    pub rounds: Vec<Round>,
    pub status: SessionStatus,
    /// Set once the final score has been handed to the leaderboard.
    #[serde(default)]
    pub recorded: bool,
}

impl GameSession {
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Rounds are scored in order, so the current one is the first still pending.
    pub fn current_round_index(&self) -> Option<usize> {
        self.rounds.iter().position(Round::is_pending)
    }

    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = SessionStatus::Completed;
        self.ended_at = Some(now);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub rank: u32,
    pub username: String,
    pub difficulty: Difficulty,
    pub total_score: u32,
    pub games_played: u32,
    pub updated_at: DateTime<Utc>,
}

// --- Request / response bodies ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest {
    pub username: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameResponse {
    pub session_id: Uuid,
    pub difficulty: Difficulty,
    pub total_rounds: usize,
    pub current_round: u32,
    pub flight: DisplayFlight,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub session_id: Uuid,
    pub airport_iata: String,
    #[serde(default)]
    pub confidence: i32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub score: ScoreResult,
    pub round_number: u32,
    pub is_game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_flight: Option<DisplayFlight>,
    pub total_score: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndGameRequest {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndGameResponse {
    pub session_id: Uuid,
    pub total_score: u32,
    pub rounds: Vec<Round>,
    pub rank: u32,
    pub difficulty: Difficulty,
}
