use std::sync::Arc;

use actix::Message;
use parking_lot::RwLock;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{models::FlightPosition, protocol::HubEvent};

/// Serialized frame waiting in a viewer's outbound queue.
pub type Outbound = Arc<str>;

/// Session id a viewer is associated with. Written by the viewer's read loop,
/// read by the hub when routing targeted events.
pub type SessionSlot = Arc<RwLock<Option<Uuid>>>;

#[derive(Message)]
#[rtype(result = "()")]
pub struct Register {
    pub viewer_id: Uuid,
    /// The hub keeps the only sender. Dropping it closes the viewer's write loop.
    pub outbound: mpsc::Sender<Outbound>,
    pub session: SessionSlot,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Unregister {
    pub viewer_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Broadcast {
    pub flights: Vec<FlightPosition>,
}

#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct SendToSession {
    pub session_id: Uuid,
    pub event: HubEvent,
}

#[derive(Message)]
#[rtype(result = "usize")]
pub struct ViewerCount;
