use std::{sync::Arc, time::Duration};

use actix::{Actor, System};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use anyhow::Context;
use prometheus::{Encoder, TextEncoder};
use skyquest_server::{
    api::configure_routes,
    cache::{FlightCache, RedisFlightCache},
    catalog::FlightCatalog,
    connect_redis,
    display::DisplayPreparer,
    env::Settings,
    flights::{spawn_flight_poller, FlightService},
    hints::CityFacts,
    hub::BroadcastHub,
    metrics::MetricsCtx,
    provider::AviationStackProvider,
    rng::GameRng,
    scoring::ScoringEngine,
    session::{SessionEngine, SessionEngineDeps},
    store::{FallbackStore, RedisStore},
    AppState, LoggerManager,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. 환경변수 로드
    dotenv::dotenv().ok();

    // 2. 설정 파일 로드
    let settings = Settings::new().context("Failed to load settings")?;

    // 3. 로거 초기화 (guard 는 프로세스 종료까지 유지)
    let _logger_manager = LoggerManager::setup(&settings);

    // 4. 난수원
    let rng = Arc::new(GameRng::from_seed_option(settings.game.random_seed));
    if let Some(seed) = settings.game.random_seed {
        info!("Random source seeded with {}", seed);
    }

    // 5. Metrics 초기화
    let metrics = Arc::new(MetricsCtx::new());
    let metrics_registry = prometheus::Registry::new();
    metrics::register_custom_metrics(&metrics_registry)
        .context("Failed to register custom metrics")?;
    info!("Metrics initialized and registered");

    // 6. Redis (실패 시 메모리 저장소로 동작)
    let redis_conn = connect_redis(&settings.redis).await;
    let store = Arc::new(FallbackStore::new(
        redis_conn.clone().map(RedisStore::new),
        metrics.clone(),
    ));
    let flight_cache: Option<Arc<dyn FlightCache>> = redis_conn
        .map(|conn| Arc::new(RedisFlightCache::new(conn)) as Arc<dyn FlightCache>);

    // 7. 전역 Shutdown Token
    let shutdown_token = CancellationToken::new();

    // 8. BroadcastHub 시작
    let hub_addr = BroadcastHub::new(metrics.clone()).start();
    info!("BroadcastHub actor started");

    // 9. 항공편 카탈로그 및 서비스
    let catalog = Arc::new(FlightCatalog::new(rng.clone()));
    let city_facts = Arc::new(CityFacts::new(rng.clone()));
    let provider = Arc::new(
        AviationStackProvider::new(&settings.flights).context("Failed to build flight provider")?,
    );
    let flight_service = Arc::new(
        FlightService::new(
            catalog.clone(),
            provider,
            flight_cache,
            Duration::from_secs(settings.flights.cache_ttl_seconds),
            metrics.clone(),
        )
        .with_fact_cache(city_facts.clone()),
    );
    flight_service.load_initial().await;

    let poller = spawn_flight_poller(
        flight_service.clone(),
        hub_addr.clone(),
        Duration::from_secs(settings.flights.poll_interval_seconds.max(1)),
        shutdown_token.clone(),
    );

    // 10. 게임 세션 엔진
    let engine = Arc::new(SessionEngine::new(SessionEngineDeps {
        flights: flight_service.clone(),
        display: Arc::new(DisplayPreparer::new(rng.clone(), city_facts)),
        scoring: ScoringEngine::new(catalog),
        sessions: store.clone(),
        leaderboard: store.clone(),
        notifier: Some(hub_addr.clone().recipient()),
        metrics: metrics.clone(),
        total_rounds: settings.game.total_rounds,
    }));

    // 11. AppState 구성
    let app_state = AppState {
        settings: settings.clone(),
        engine,
        flights: flight_service,
        leaderboard: store,
        hub_addr,
        metrics,
        metrics_registry,
    };

    // 12. HTTP 서버 시작
    let bind_address = format!("{}:{}", settings.server.bind_address, settings.server.port);
    info!("Starting HTTP server on {}", bind_address);

    let mut server = HttpServer::new(move || {
        // /metrics 엔드포인트 (optional auth)
        let metrics_route = |req: HttpRequest, state: web::Data<AppState>| async move {
            if let Some(expected_token) = &state.settings.server.metrics_auth_token {
                let provided_token = req
                    .headers()
                    .get("Authorization")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.strip_prefix("Bearer "));

                if provided_token != Some(expected_token.as_str()) {
                    return HttpResponse::Unauthorized()
                        .body("Unauthorized: Invalid or missing token");
                }
            }

            let metric_families = state.metrics_registry.gather();
            let mut buffer = Vec::new();
            let encoder = TextEncoder::new();

            if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
                return HttpResponse::InternalServerError()
                    .body(format!("Metrics encode error: {}", e));
            }

            HttpResponse::Ok()
                .content_type(encoder.format_type())
                .body(buffer)
        };

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(configure_routes)
            .route("/metrics", web::get().to(metrics_route))
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    info!("SkyQuest server is running on {}", bind_address);

    // 13. 종료 신호 대기
    tokio::select! {
        res = &mut server => {
            error!("Server exited unexpectedly");
            shutdown_token.cancel();
            return res.context("HTTP server failed");
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl+C received. Initiating graceful shutdown...");
            shutdown_token.cancel();
            System::current().stop();
        },
    }

    // 14. 폴러와 서버 정리 대기
    if let Err(e) = poller.await {
        error!("Flight poller task failed: {}", e);
    }
    server.await.context("HTTP server failed during shutdown")?;
    info!("System has shut down gracefully");

    Ok(())
}
