use std::sync::Arc;

use actix::Actor;
use chrono::Utc;
use parking_lot::RwLock;
use skyquest_server::{
    hub::{
        messages::{Broadcast, Outbound, Register, SendToSession, Unregister, ViewerCount},
        BroadcastHub,
    },
    metrics::MetricsCtx,
    models::FlightPosition,
    protocol::HubEvent,
};
use tokio::sync::mpsc;
use uuid::Uuid;

fn position(id: &str) -> FlightPosition {
    FlightPosition {
        id: id.to_string(),
        latitude: 51.4,
        longitude: -0.4,
        altitude: 36000.0,
        speed: 470.0,
        direction: 270.0,
        updated_at: Utc::now(),
    }
}

fn register(capacity: usize, session: Option<Uuid>) -> (Register, mpsc::Receiver<Outbound>) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        Register {
            viewer_id: Uuid::new_v4(),
            outbound: tx,
            session: Arc::new(RwLock::new(session)),
        },
        rx,
    )
}

#[actix::test]
async fn stalled_viewer_is_dropped_and_others_keep_receiving() {
    let hub = BroadcastHub::new(Arc::new(MetricsCtx::new())).start();

    // 큐가 이미 가득 찬 느린 뷰어
    let (slow, mut slow_rx) = register(1, None);
    slow.outbound.try_send(Arc::from("backlog")).unwrap();
    let (healthy, mut healthy_rx) = register(8, None);

    hub.send(slow).await.unwrap();
    hub.send(healthy).await.unwrap();
    assert_eq!(hub.send(ViewerCount).await.unwrap(), 2);

    hub.send(Broadcast {
        flights: vec![position("f1")],
    })
    .await
    .unwrap();

    assert_eq!(hub.send(ViewerCount).await.unwrap(), 1);

    // 느린 뷰어는 기존 프레임 이후 닫힘
    assert_eq!(&*slow_rx.recv().await.unwrap(), "backlog");
    assert!(slow_rx.recv().await.is_none());

    let frame = healthy_rx.recv().await.unwrap();
    let event: HubEvent = serde_json::from_str(&frame).unwrap();
    match event {
        HubEvent::FlightUpdate { flights } => assert_eq!(flights[0].id, "f1"),
        other => panic!("unexpected event {:?}", other),
    }
}

#[actix::test]
async fn frames_arrive_in_order_and_end_after_unregister() {
    let hub = BroadcastHub::new(Arc::new(MetricsCtx::new())).start();
    let session_id = Uuid::new_v4();
    let (viewer, mut rx) = register(16, Some(session_id));
    let viewer_id = viewer.viewer_id;
    hub.send(viewer).await.unwrap();

    for i in 0..3 {
        hub.send(Broadcast {
            flights: vec![position(&format!("f{i}"))],
        })
        .await
        .unwrap();
    }
    hub.send(SendToSession {
        session_id,
        event: HubEvent::GameEnd {
            session_id,
            total_score: 1200,
            rank: 3,
        },
    })
    .await
    .unwrap();
    hub.send(Unregister { viewer_id }).await.unwrap();

    for i in 0..3 {
        let frame = rx.recv().await.unwrap();
        assert!(frame.contains(&format!("\"f{i}\"")));
    }
    let last = rx.recv().await.unwrap();
    assert!(last.contains("game:end"));
    assert!(last.contains("1200"));
    assert!(rx.recv().await.is_none());
    assert_eq!(hub.send(ViewerCount).await.unwrap(), 0);
}
