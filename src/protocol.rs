use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{DisplayFlight, FlightPosition, ScoreResult};

// --- Viewer to Server Messages ---

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// 이 연결을 특정 게임 세션과 연결합니다.
    #[serde(rename = "register", rename_all = "camelCase")]
    Register { session_id: Uuid },
}

// --- Server to Viewer Messages ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum HubEvent {
    /// Periodic position snapshot sent to every viewer.
    #[serde(rename = "flight:update")]
    FlightUpdate { flights: Vec<FlightPosition> },

    #[serde(rename = "round:start", rename_all = "camelCase")]
    RoundStart {
        session_id: Uuid,
        round_number: u32,
        flight: DisplayFlight,
    },

    #[serde(rename = "guess:result", rename_all = "camelCase")]
    GuessResult {
        session_id: Uuid,
        round_number: u32,
        score: ScoreResult,
        total_score: u32,
    },

    #[serde(rename = "game:end", rename_all = "camelCase")]
    GameEnd {
        session_id: Uuid,
        total_score: u32,
        rank: u32,
    },

    #[serde(rename = "error")]
    Error { code: ErrorCode, message: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidMessageFormat,
}
