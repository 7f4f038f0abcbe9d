use std::{io, sync::Arc, time::Duration};

use actix::Addr;
use backoff::ExponentialBackoff;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ::redis::aio::ConnectionManager;

use crate::{
    env::{RedisSettings, Settings},
    flights::FlightService,
    hub::BroadcastHub,
    metrics::MetricsCtx,
    session::SessionEngine,
    store::LeaderboardStore,
};

pub mod api;
pub mod cache;
pub mod catalog;
pub mod display;
pub mod env;
pub mod errors;
pub mod flights;
pub mod geo;
pub mod hints;
pub mod hub;
pub mod metrics;
pub mod models;
pub mod protocol;
pub mod provider;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod store;
pub mod viewer;

pub struct LoggerManager {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

impl LoggerManager {
    pub fn setup(settings: &Settings) -> Self {
        // 1. 파일 로거 설정
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            &settings.logging.directory,
            &settings.logging.filename,
        );
        let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(file_appender);

        // 2. 로그 레벨 필터 (RUST_LOG 우선, 없으면 설정 파일 값)
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.server.log_level));

        // 3. 콘솔 출력 레이어
        let console_layer = fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(false);

        // 4. 파일 출력 레이어
        let file_layer = fmt::layer()
            .with_writer(non_blocking_file_writer)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .init();

        tracing::info!(
            "Logger ready: console and file ({}/{})",
            settings.logging.directory,
            settings.logging.filename
        );

        Self { _guard: guard }
    }
}

// 모든 핸들러가 공유하는 서버 상태
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub engine: Arc<SessionEngine>,
    pub flights: Arc<FlightService>,
    pub leaderboard: Arc<dyn LeaderboardStore>,
    pub hub_addr: Addr<BroadcastHub>,
    pub metrics: Arc<MetricsCtx>,
    pub metrics_registry: prometheus::Registry,
}

/// Opens a managed Redis connection, retrying with exponential backoff.
///
/// Returns `None` when Redis is disabled or every attempt failed; callers then run
/// on the in-memory store.
pub async fn connect_redis(settings: &RedisSettings) -> Option<ConnectionManager> {
    if !settings.enabled {
        info!("Redis disabled by configuration");
        return None;
    }

    let client = match ::redis::Client::open(settings.url.as_str()) {
        Ok(client) => client,
        Err(e) => {
            warn!("Invalid Redis URL {}: {}", settings.url, e);
            return None;
        }
    };

    let max_attempts = settings.max_reconnect_attempts.max(1);
    let backoff = ExponentialBackoff {
        initial_interval: Duration::from_millis(settings.initial_reconnect_delay_ms),
        max_interval: Duration::from_millis(settings.max_reconnect_delay_ms),
        max_elapsed_time: None,
        ..ExponentialBackoff::default()
    };

    let mut attempt = 0u32;
    let result = backoff::future::retry(backoff, || {
        attempt += 1;
        let client = client.clone();
        let current = attempt;
        async move {
            ConnectionManager::new(client).await.map_err(|e| {
                warn!(
                    "Redis connection attempt {}/{} failed: {}",
                    current, max_attempts, e
                );
                if current >= max_attempts {
                    backoff::Error::permanent(e)
                } else {
                    backoff::Error::transient(e)
                }
            })
        }
    })
    .await;

    match result {
        Ok(conn) => {
            info!("Redis connection established: {}", settings.url);
            Some(conn)
        }
        Err(e) => {
            warn!("Giving up on Redis, running in memory: {}", e);
            None
        }
    }
}
