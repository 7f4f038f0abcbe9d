use std::sync::Arc;

use actix::{Context, Handler};
use tracing::{debug, error, info};

use super::{
    messages::{Broadcast, Outbound, Register, SendToSession, Unregister, ViewerCount},
    BroadcastHub, Viewer,
};
use crate::protocol::HubEvent;

fn encode(event: &HubEvent) -> Option<Outbound> {
    match serde_json::to_string(event) {
        Ok(json) => Some(Arc::from(json)),
        Err(e) => {
            error!("Failed to serialize hub event: {}", e);
            None
        }
    }
}

impl Handler<Register> for BroadcastHub {
    type Result = ();

    fn handle(&mut self, msg: Register, _ctx: &mut Context<Self>) -> Self::Result {
        info!("Viewer {} registered", msg.viewer_id);
        self.viewers.insert(
            msg.viewer_id,
            Viewer {
                outbound: msg.outbound,
                session: msg.session,
            },
        );
        self.metrics.set_active_viewers(self.viewers.len());
    }
}

impl Handler<Unregister> for BroadcastHub {
    type Result = ();

    fn handle(&mut self, msg: Unregister, _ctx: &mut Context<Self>) -> Self::Result {
        if self.remove_viewer(msg.viewer_id) {
            info!("Viewer {} unregistered", msg.viewer_id);
        } else {
            debug!("Viewer {} already unregistered", msg.viewer_id);
        }
    }
}

impl Handler<Broadcast> for BroadcastHub {
    type Result = ();

    fn handle(&mut self, msg: Broadcast, _ctx: &mut Context<Self>) -> Self::Result {
        let count = msg.flights.len();
        let Some(frame) = encode(&HubEvent::FlightUpdate {
            flights: msg.flights,
        }) else {
            return;
        };

        let delivered = self.deliver(frame, |_| true);
        debug!(
            "Broadcast {} flight positions to {} viewers",
            count, delivered
        );
    }
}

impl Handler<SendToSession> for BroadcastHub {
    type Result = ();

    fn handle(&mut self, msg: SendToSession, _ctx: &mut Context<Self>) -> Self::Result {
        let Some(frame) = encode(&msg.event) else {
            return;
        };

        let session_id = msg.session_id;
        let delivered = self.deliver(frame, |viewer| {
            *viewer.session.read() == Some(session_id)
        });
        if delivered == 0 {
            debug!("No live viewer for session {}, event skipped", session_id);
        }
    }
}

impl Handler<ViewerCount> for BroadcastHub {
    type Result = usize;

    fn handle(&mut self, _msg: ViewerCount, _ctx: &mut Context<Self>) -> Self::Result {
        self.viewers.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix::Actor;
    use parking_lot::RwLock;
    use tokio::sync::mpsc;
    use uuid::Uuid;

    use super::*;
    use crate::metrics::MetricsCtx;

    fn viewer(capacity: usize, session: Option<Uuid>) -> (Register, mpsc::Receiver<Outbound>) {
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
    async fn unregister_is_idempotent_and_closes_queue_once() {
        let hub = BroadcastHub::new(Arc::new(MetricsCtx::new())).start();
        let (register, mut rx) = viewer(4, None);
        let id = register.viewer_id;
        hub.send(register).await.unwrap();
        assert_eq!(hub.send(ViewerCount).await.unwrap(), 1);

        hub.send(Unregister { viewer_id: id }).await.unwrap();
        hub.send(Unregister { viewer_id: id }).await.unwrap();
        assert_eq!(hub.send(ViewerCount).await.unwrap(), 0);
        assert!(rx.recv().await.is_none());
    }

    #[actix::test]
    async fn targeted_send_reaches_only_associated_viewer() {
        let hub = BroadcastHub::new(Arc::new(MetricsCtx::new())).start();
        let session_id = Uuid::new_v4();
        let (mine, mut mine_rx) = viewer(4, None);
        let slot = mine.session.clone();
        let (other, mut other_rx) = viewer(4, Some(Uuid::new_v4()));
        hub.send(mine).await.unwrap();
        hub.send(other).await.unwrap();

        // association happens after registration, like a late "register" message
        *slot.write() = Some(session_id);

        hub.send(SendToSession {
            session_id,
            event: HubEvent::GameEnd {
                session_id,
                total_score: 10,
                rank: 1,
            },
        })
        .await
        .unwrap();

        let frame = mine_rx.recv().await.unwrap();
        assert!(frame.contains("game:end"));
        assert!(other_rx.try_recv().is_err());

        // no associated viewer: silently nothing
        hub.send(SendToSession {
            session_id: Uuid::new_v4(),
            event: HubEvent::GameEnd {
                session_id,
                total_score: 10,
                rank: 1,
            },
        })
        .await
        .unwrap();
        assert_eq!(hub.send(ViewerCount).await.unwrap(), 2);
    }
}
