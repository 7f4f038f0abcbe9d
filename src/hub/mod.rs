use std::{collections::HashMap, sync::Arc};

use actix::{Actor, Context};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{info, warn};
use uuid::Uuid;

use crate::metrics::MetricsCtx;

pub mod handlers;
pub mod messages;

use messages::{Outbound, SessionSlot};

struct Viewer {
    outbound: mpsc::Sender<Outbound>,
    session: SessionSlot,
}

/// Owns every live viewer connection.
///
/// All mutation of the viewer set happens inside this actor; producers only hand
/// it messages with `do_send`. A viewer whose queue is full is dropped instead of
/// making the sender wait.
pub struct BroadcastHub {
    viewers: HashMap<Uuid, Viewer>,
    metrics: Arc<MetricsCtx>,
}

impl BroadcastHub {
    pub fn new(metrics: Arc<MetricsCtx>) -> Self {
        Self {
            viewers: HashMap::new(),
            metrics,
        }
    }

    fn remove_viewer(&mut self, viewer_id: Uuid) -> bool {
        // 엔트리 제거 시 Sender 가 drop 되어 큐가 정확히 한 번 닫힙니다.
        let removed = self.viewers.remove(&viewer_id).is_some();
        if removed {
            self.metrics.set_active_viewers(self.viewers.len());
        }
        removed
    }

    /// Enqueues `frame` to every viewer accepted by `filter`, dropping stalled ones.
    fn deliver(&mut self, frame: Outbound, filter: impl Fn(&Viewer) -> bool) -> usize {
        let mut delivered = 0;
        let mut stalled = Vec::new();

        for (viewer_id, viewer) in self.viewers.iter().filter(|(_, v)| filter(v)) {
            match viewer.outbound.try_send(frame.clone()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!("Viewer {} outbound queue is full, dropping connection", viewer_id);
                    self.metrics.inc_stalled_viewer_dropped();
                    stalled.push(*viewer_id);
                }
                Err(TrySendError::Closed(_)) => {
                    info!("Viewer {} write loop already gone, removing", viewer_id);
                    stalled.push(*viewer_id);
                }
            }
        }

        for viewer_id in stalled {
            self.remove_viewer(viewer_id);
        }
        delivered
    }
}

impl Actor for BroadcastHub {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("BroadcastHub actor started");
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!(
            "BroadcastHub actor stopped, releasing {} viewers",
            self.viewers.len()
        );
        self.viewers.clear();
        self.metrics.set_active_viewers(0);
    }
}
