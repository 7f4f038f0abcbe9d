use std::{sync::Arc, time::Duration};

use actix::Addr;
use actix_web::{get, rt, web, Error, HttpRequest, HttpResponse};
use actix_ws::{Message, MessageStream, Session};
use futures_util::StreamExt;
use parking_lot::{Mutex, RwLock};
use serde::Deserialize;
use tokio::{sync::mpsc, time::Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    hub::{
        messages::{Outbound, Register, SessionSlot, Unregister},
        BroadcastHub,
    },
    protocol::{ClientMessage, ErrorCode, HubEvent},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

/// GET /ws
/// Attaches a live feed viewer. `?sessionId=` associates it with a game up front.
#[get("/ws")]
pub async fn viewer_ws_route(
    req: HttpRequest,
    body: web::Payload,
    query: web::Query<ViewerQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let (response, session, stream) = actix_ws::handle(&req, body)?;

    let viewer_id = Uuid::new_v4();
    let initial_session = query
        .session_id
        .as_deref()
        .and_then(|raw| Uuid::parse_str(raw).ok());
    let slot: SessionSlot = Arc::new(RwLock::new(initial_session));
    let (tx, rx) = mpsc::channel(state.settings.hub.queue_capacity.max(1));
    let last_seen = Arc::new(Mutex::new(Instant::now()));

    state.hub_addr.do_send(Register {
        viewer_id,
        outbound: tx,
        session: slot.clone(),
    });
    info!(
        "Viewer {} connected (session: {:?})",
        viewer_id, initial_session
    );

    rt::spawn(write_loop(
        session.clone(),
        rx,
        HeartbeatConfig {
            interval: Duration::from_secs(state.settings.hub.heartbeat_interval_seconds.max(1)),
            timeout: Duration::from_secs(state.settings.hub.client_timeout_seconds),
        },
        last_seen.clone(),
        viewer_id,
        state.hub_addr.clone(),
    ));
    rt::spawn(read_loop(
        session,
        stream,
        slot,
        last_seen,
        viewer_id,
        state.hub_addr.clone(),
    ));

    Ok(response)
}

struct HeartbeatConfig {
    interval: Duration,
    timeout: Duration,
}

/// Drains the outbound queue to the socket in order and pings on every tick.
async fn write_loop(
    mut session: Session,
    mut outbound: mpsc::Receiver<Outbound>,
    heartbeat: HeartbeatConfig,
    last_seen: Arc<Mutex<Instant>>,
    viewer_id: Uuid,
    hub: Addr<BroadcastHub>,
) {
    let mut ticker = tokio::time::interval(heartbeat.interval);

    loop {
        tokio::select! {
            frame = outbound.recv() => match frame {
                Some(frame) => {
                    if let Err(e) = session.text(frame.to_string()).await {
                        debug!("Viewer {} socket closed while writing: {:?}", viewer_id, e);
                        break;
                    }
                }
                None => {
                    debug!("Viewer {} queue released by hub", viewer_id);
                    break;
                }
            },
            _ = ticker.tick() => {
                if last_seen.lock().elapsed() > heartbeat.timeout {
                    warn!("Viewer {} heartbeat timeout. Closing connection.", viewer_id);
                    break;
                }
                if session.ping(b"heartbeat").await.is_err() {
                    break;
                }
            }
        }
    }

    hub.do_send(Unregister { viewer_id });
    let _ = session.close(None).await;
}

/// Parses control messages until the socket fails or closes.
async fn read_loop(
    mut session: Session,
    mut stream: MessageStream,
    slot: SessionSlot,
    last_seen: Arc<Mutex<Instant>>,
    viewer_id: Uuid,
    hub: Addr<BroadcastHub>,
) {
    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => {
                *last_seen.lock() = Instant::now();
                if let Some(reply) = handle_control(&text, &slot, viewer_id) {
                    if session.text(reply).await.is_err() {
                        break;
                    }
                }
            }
            Ok(Message::Ping(bytes)) => {
                *last_seen.lock() = Instant::now();
                if session.pong(&bytes).await.is_err() {
                    break;
                }
            }
            Ok(Message::Pong(_)) => {
                *last_seen.lock() = Instant::now();
            }
            Ok(Message::Close(reason)) => {
                info!("Viewer {} closed connection: {:?}", viewer_id, reason);
                break;
            }
            Ok(Message::Binary(_)) => {
                warn!("Viewer {} sent a binary frame, ignoring", viewer_id);
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Viewer {} read failed: {}", viewer_id, e);
                break;
            }
        }
    }

    hub.do_send(Unregister { viewer_id });
}

/// Applies a control message to the viewer's session slot. Returns an error frame
/// for anything that does not parse.
fn handle_control(text: &str, slot: &SessionSlot, viewer_id: Uuid) -> Option<String> {
    match serde_json::from_str::<ClientMessage>(text) {
        Ok(ClientMessage::Register { session_id }) => {
            *slot.write() = Some(session_id);
            debug!("Viewer {} associated with session {}", viewer_id, session_id);
            None
        }
        Err(e) => {
            warn!("Viewer {} sent an invalid message: {}", viewer_id, e);
            let reply = HubEvent::Error {
                code: ErrorCode::InvalidMessageFormat,
                message: e.to_string(),
            };
            serde_json::to_string(&reply).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_message_sets_session_slot() {
        let slot: SessionSlot = Arc::new(RwLock::new(None));
        let id = Uuid::new_v4();
        let text = format!(r#"{{"type":"register","payload":{{"sessionId":"{}"}}}}"#, id);
        assert!(handle_control(&text, &slot, Uuid::new_v4()).is_none());
        assert_eq!(*slot.read(), Some(id));
    }

    #[test]
    fn garbage_gets_error_reply_and_keeps_slot() {
        let previous = Uuid::new_v4();
        let slot: SessionSlot = Arc::new(RwLock::new(Some(previous)));
        let reply = handle_control("not json", &slot, Uuid::new_v4()).unwrap();
        assert!(reply.contains("invalid_message_format"));
        assert_eq!(*slot.read(), Some(previous));
    }
}
