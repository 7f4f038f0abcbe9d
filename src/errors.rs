use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the game session engine and the HTTP layer above it.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Session {session_id} not found")]
    SessionNotFound { session_id: String },

    #[error("Game already completed")]
    GameCompleted,

    #[error("No pending round in session")]
    InvalidRound,

    #[error("Airport code must not be empty")]
    InvalidGuess,

    #[error("Username must not be empty")]
    InvalidUsername,

    #[error("Invalid difficulty: {value}. Must be: easy, medium, or hard")]
    InvalidDifficulty { value: String },

    #[error("No flights available")]
    NoFlightsAvailable,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    pub fn session_not_found(session_id: impl ToString) -> Self {
        Self::SessionNotFound {
            session_id: session_id.to_string(),
        }
    }

    pub fn invalid_difficulty(value: impl Into<String>) -> Self {
        Self::InvalidDifficulty {
            value: value.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<StoreError> for GameError {
    fn from(e: StoreError) -> Self {
        GameError::internal(e.to_string())
    }
}

// Actix-web 이 에러를 HTTP 응답으로 변환할 수 있도록 ResponseError 구현
impl ResponseError for GameError {
    fn status_code(&self) -> StatusCode {
        match self {
            GameError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
            GameError::GameCompleted
            | GameError::InvalidRound
            | GameError::InvalidGuess
            | GameError::InvalidUsername
            | GameError::InvalidDifficulty { .. } => StatusCode::BAD_REQUEST,
            GameError::NoFlightsAvailable => StatusCode::SERVICE_UNAVAILABLE,
            GameError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!("{}", self);

        let status = self.status_code();
        let message = match self {
            // 5xx 에러는 상세 내용을 노출하지 않습니다.
            GameError::Internal { .. } => "An internal server error occurred.".to_string(),
            _ => self.to_string(),
        };

        HttpResponse::build(status).json(json!({ "error": message }))
    }
}

/// Failures from the durable session / leaderboard backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis operation failed: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("JSON serialization/deserialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures fetching flights from the upstream provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Flight provider API key is required - set APP_FLIGHTS__API_KEY")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(u16),
}
