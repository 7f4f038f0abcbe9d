use std::{sync::Arc, time::Duration};

use actix::Addr;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::FlightService;
use crate::hub::{messages::Broadcast, BroadcastHub};

/// Refreshes the catalog every `interval` and pushes the new positions to every viewer.
///
/// A failed refresh keeps the previous catalog and skips that tick's broadcast.
pub fn spawn_flight_poller(
    service: Arc<FlightService>,
    hub: Addr<BroadcastHub>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // 첫 tick 은 즉시 반환되므로 건너뜀 (초기 로드는 시작 시 수행)
        ticker.tick().await;

        info!("Flight poller started, interval {:?}", interval);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Flight poller shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    match service.refresh().await {
                        Ok(count) => {
                            debug!("Flight refresh complete ({} flights)", count);
                            hub.do_send(Broadcast {
                                flights: service.positions(None, None),
                            });
                        }
                        Err(e) => warn!("Flight refresh failed, keeping last catalog: {}", e),
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use actix::Actor;
    use parking_lot::RwLock;
    use tokio::sync::mpsc;
    use uuid::Uuid;

    use super::*;
    use crate::{
        catalog::{tests::flight_between, FlightCatalog},
        hub::messages::Register,
        metrics::MetricsCtx,
        provider::StaticFlightProvider,
        rng::GameRng,
    };

    #[actix::test]
    async fn broadcasts_positions_after_refresh_and_stops_on_cancel() {
        let catalog = Arc::new(FlightCatalog::new(Arc::new(GameRng::seeded(1))));
        let flight = flight_between(&catalog, "f1", "JFK", "LAX");
        let metrics = Arc::new(MetricsCtx::new());
        let service = Arc::new(FlightService::new(
            catalog,
            Arc::new(StaticFlightProvider::new(vec![flight])),
            None,
            Duration::from_secs(300),
            metrics.clone(),
        ));

        let hub = BroadcastHub::new(metrics).start();
        let (tx, mut rx) = mpsc::channel(8);
        hub.send(Register {
            viewer_id: Uuid::new_v4(),
            outbound: tx,
            session: Arc::new(RwLock::new(None)),
        })
        .await
        .unwrap();

        let shutdown = CancellationToken::new();
        let handle = spawn_flight_poller(
            service,
            hub,
            Duration::from_millis(20),
            shutdown.clone(),
        );

        let frame = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(frame.contains("flight:update"));
        assert!(frame.contains("f1"));
        assert!(!frame.contains("LAX"));

        shutdown.cancel();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
