use actix_web::{error::InternalError, get, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::{
    errors::GameResult,
    hub::messages::ViewerCount,
    models::{Difficulty, EndGameRequest, GuessRequest, StartGameRequest},
    store::clamp_limit,
    viewer::viewer_ws_route,
    AppState,
};

pub const DEFAULT_FLIGHTS_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub difficulty: Option<String>,
    pub limit: Option<usize>,
}

fn parse_difficulty(raw: Option<&str>) -> GameResult<Option<Difficulty>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// POST /api/game/start
#[post("/api/game/start")]
pub async fn start_game(
    state: web::Data<AppState>,
    body: web::Json<StartGameRequest>,
) -> GameResult<HttpResponse> {
    let body = body.into_inner();
    let response = state.engine.start(&body.username, body.difficulty).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/game/guess
#[post("/api/game/guess")]
pub async fn submit_guess(
    state: web::Data<AppState>,
    body: web::Json<GuessRequest>,
) -> GameResult<HttpResponse> {
    let response = state
        .engine
        .guess(body.session_id, &body.airport_iata, body.confidence)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/game/end
#[post("/api/game/end")]
pub async fn end_game(
    state: web::Data<AppState>,
    body: web::Json<EndGameRequest>,
) -> GameResult<HttpResponse> {
    let response = state.engine.end(body.session_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/flights?difficulty=&limit=
/// Positions only. Destinations never leave the server through this route.
#[get("/api/flights")]
pub async fn list_flights(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> GameResult<HttpResponse> {
    let difficulty = parse_difficulty(query.difficulty.as_deref())?;
    let limit = query.limit.unwrap_or(DEFAULT_FLIGHTS_LIMIT);
    let flights = state.flights.positions(difficulty, Some(limit));
    Ok(HttpResponse::Ok().json(json!({
        "flights": flights,
        "count": flights.len(),
    })))
}

#[get("/api/airports")]
pub async fn list_airports(state: web::Data<AppState>) -> HttpResponse {
    let airports = state.flights.catalog().airports();
    HttpResponse::Ok().json(json!({
        "airports": airports,
        "count": airports.len(),
    }))
}

/// GET /api/leaderboard?difficulty=&limit=
#[get("/api/leaderboard")]
pub async fn leaderboard(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> GameResult<HttpResponse> {
    let difficulty = parse_difficulty(query.difficulty.as_deref())?;
    let entries = state
        .leaderboard
        .leaderboard(difficulty, clamp_limit(query.limit))
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "leaderboard": entries,
        "count": entries.len(),
        "difficulty": difficulty.map(|d| d.as_str()).unwrap_or("all"),
    })))
}

#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let viewers = match state.hub_addr.send(ViewerCount).await {
        Ok(count) => count,
        Err(e) => {
            warn!("Hub did not answer the viewer count: {}", e);
            0
        }
    };
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "flights": state.flights.catalog().len(),
        "viewers": viewers,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as game errors.
fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(start_game)
        .service(submit_guess)
        .service(end_game)
        .service(list_flights)
        .service(list_airports)
        .service(leaderboard)
        .service(health)
        .service(viewer_ws_route);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GameError;

    #[test]
    fn difficulty_query_is_optional_but_validated() {
        assert_eq!(parse_difficulty(None).unwrap(), None);
        assert_eq!(parse_difficulty(Some(" ")).unwrap(), None);
        assert_eq!(
            parse_difficulty(Some("hard")).unwrap(),
            Some(Difficulty::Hard)
        );
        assert!(matches!(
            parse_difficulty(Some("extreme")),
            Err(GameError::InvalidDifficulty { .. })
        ));
    }
}
