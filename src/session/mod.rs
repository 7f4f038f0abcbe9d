use std::{collections::HashMap, sync::Arc};

use actix::Recipient;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    display::DisplayPreparer,
    errors::{GameError, GameResult},
    flights::FlightService,
    hub::messages::SendToSession,
    metrics::MetricsCtx,
    models::{
        Difficulty, EndGameResponse, GameSession, GuessResponse, Round, SessionStatus,
        StartGameResponse,
    },
    protocol::HubEvent,
    scoring::ScoringEngine,
    store::{LeaderboardStore, SessionStore},
};

/// Everything the engine needs, wired once at startup.
pub struct SessionEngineDeps {
    pub flights: Arc<FlightService>,
    pub display: Arc<DisplayPreparer>,
    pub scoring: ScoringEngine,
    pub sessions: Arc<dyn SessionStore>,
    pub leaderboard: Arc<dyn LeaderboardStore>,
    pub notifier: Option<Recipient<SendToSession>>,
    pub metrics: Arc<MetricsCtx>,
    pub total_rounds: usize,
}

/// Game session state machine: start, one guess per round, then completed.
///
/// Calls for the same session are serialised by a per-session async lock so that
/// every guess sees the state left by the previous one.
pub struct SessionEngine {
    flights: Arc<FlightService>,
    display: Arc<DisplayPreparer>,
    scoring: ScoringEngine,
    sessions: Arc<dyn SessionStore>,
    leaderboard: Arc<dyn LeaderboardStore>,
    notifier: Option<Recipient<SendToSession>>,
    metrics: Arc<MetricsCtx>,
    total_rounds: usize,
    locks: Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>,
}

impl SessionEngine {
    pub fn new(deps: SessionEngineDeps) -> Self {
        Self {
            flights: deps.flights,
            display: deps.display,
            scoring: deps.scoring,
            sessions: deps.sessions,
            leaderboard: deps.leaderboard,
            notifier: deps.notifier,
            metrics: deps.metrics,
            total_rounds: deps.total_rounds.max(1),
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    fn lock_for(&self, session_id: Uuid) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        // 아무도 잡고 있지 않은 락은 정리
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks.entry(session_id).or_default().clone()
    }

    fn notify(&self, session_id: Uuid, event: HubEvent) {
        if let Some(notifier) = &self.notifier {
            notifier.do_send(SendToSession { session_id, event });
        }
    }

    async fn load(&self, session_id: Uuid) -> GameResult<GameSession> {
        self.sessions
            .get(session_id)
            .await?
            .ok_or_else(|| GameError::session_not_found(session_id))
    }

    pub async fn session(&self, session_id: Uuid) -> GameResult<GameSession> {
        self.load(session_id).await
    }

    pub async fn start(&self, username: &str, difficulty: Difficulty) -> GameResult<StartGameResponse> {
        let username = username.trim();
        if username.is_empty() {
            return Err(GameError::InvalidUsername);
        }

        let flights = self
            .flights
            .sample_for_game(difficulty, self.total_rounds)
            .await?;

        let now = Utc::now();
        let rounds: Vec<Round> = flights
            .into_iter()
            .enumerate()
            .map(|(i, flight)| Round::new(i as u32 + 1, flight, now))
            .collect();

        let session = GameSession {
            session_id: Uuid::new_v4(),
            username: username.to_string(),
            difficulty,
            started_at: now,
            ended_at: None,
            total_score: 0,
            rounds,
            status: SessionStatus::InProgress,
            recorded: false,
        };
        let first = session
            .rounds
            .first()
            .ok_or(GameError::NoFlightsAvailable)?;
        self.sessions.create(&session).await?;

        let flight = self.display.prepare(&first.flight, difficulty);

        self.metrics.inc_game_started(difficulty);
        info!(
            "Game {} started for {} ({}, {} rounds)",
            session.session_id,
            session.username,
            difficulty,
            session.rounds.len()
        );
        self.notify(
            session.session_id,
            HubEvent::RoundStart {
                session_id: session.session_id,
                round_number: first.round_number,
                flight: flight.clone(),
            },
        );

        Ok(StartGameResponse {
            session_id: session.session_id,
            difficulty,
            total_rounds: session.rounds.len(),
            current_round: first.round_number,
            flight,
        })
    }

    pub async fn guess(
        &self,
        session_id: Uuid,
        airport_code: &str,
        confidence: i32,
    ) -> GameResult<GuessResponse> {
        let code = airport_code.trim().to_uppercase();
        if code.is_empty() {
            return Err(GameError::InvalidGuess);
        }

        let lock = self.lock_for(session_id);
        let _guard = lock.lock().await;

        let mut session = self.load(session_id).await?;
        if session.is_completed() {
            return Err(GameError::GameCompleted);
        }
        let index = session
            .current_round_index()
            .ok_or(GameError::InvalidRound)?;

        let now = Utc::now();
        let difficulty = session.difficulty;
        let round = &mut session.rounds[index];
        let elapsed = ((now - round.started_at).num_milliseconds() as f64 / 1000.0).max(0.0);

        let score = self.scoring.score(
            &round.actual_arrival,
            &code,
            difficulty,
            elapsed,
            Some(&round.flight.arrival),
        );

        round.player_guess = Some(code);
        round.points_earned = score.total_points;
        round.guess_time = elapsed;
        round.confidence = confidence;
        round.completed_at = Some(now);
        let round_number = round.round_number;
        session.total_score += score.total_points;

        let next_flight = if index + 1 == session.rounds.len() {
            session.complete(now);
            self.metrics.inc_game_completed(difficulty);
            None
        } else {
            // 다음 라운드의 타이머는 서버 기준으로 지금부터 시작
            let next = &mut session.rounds[index + 1];
            next.started_at = now;
            Some((next.round_number, self.display.prepare(&next.flight, difficulty)))
        };

        self.sessions.update(&session).await?;
        self.metrics.inc_guess(score.match_type);

        self.notify(
            session_id,
            HubEvent::GuessResult {
                session_id,
                round_number,
                score: score.clone(),
                total_score: session.total_score,
            },
        );
        if let Some((next_round, flight)) = &next_flight {
            self.notify(
                session_id,
                HubEvent::RoundStart {
                    session_id,
                    round_number: *next_round,
                    flight: flight.clone(),
                },
            );
        }

        Ok(GuessResponse {
            score,
            round_number,
            is_game_over: session.is_completed(),
            next_flight: next_flight.map(|(_, flight)| flight),
            total_score: session.total_score,
        })
    }

    /// Completes the game if needed, records the score once and reports the rank.
    pub async fn end(&self, session_id: Uuid) -> GameResult<EndGameResponse> {
        let lock = self.lock_for(session_id);
        let _guard = lock.lock().await;

        let mut session = self.load(session_id).await?;
        let mut dirty = false;
        // 이미 종료·기록된 세션에 대한 반복 호출은 알림을 다시 보내지 않음
        let repeat = session.is_completed() && session.recorded;

        if !session.is_completed() {
            session.complete(Utc::now());
            self.metrics.inc_game_completed(session.difficulty);
            dirty = true;
        }

        if !session.recorded {
            match self.leaderboard.save_score(&session).await {
                Ok(_) => {
                    session.recorded = true;
                    dirty = true;
                }
                Err(e) => {
                    // 점수 저장 실패는 응답을 막지 않습니다.
                    error!("Failed to save score for game {}: {}", session_id, e);
                    self.metrics.inc_leaderboard_write_failure();
                }
            }
        }

        if dirty {
            self.sessions.update(&session).await?;
        }

        let rank = match self
            .leaderboard
            .rank(&session.username, session.difficulty)
            .await
        {
            Ok(rank) => rank.unwrap_or(0),
            Err(e) => {
                warn!("Failed to resolve rank for {}: {}", session.username, e);
                0
            }
        };

        info!(
            "Game {} ended for {} with {} points (rank {})",
            session_id, session.username, session.total_score, rank
        );
        if !repeat {
            self.notify(
                session_id,
                HubEvent::GameEnd {
                    session_id,
                    total_score: session.total_score,
                    rank,
                },
            );
        }

        Ok(EndGameResponse {
            session_id,
            total_score: session.total_score,
            rounds: session.rounds,
            rank,
            difficulty: session.difficulty,
        })
    }
}
