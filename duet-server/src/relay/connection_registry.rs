use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use duet_core::{PeerId, ServerMessage};
use tokio::sync::mpsc;
use tracing::{debug, error};

pub type Outbox = mpsc::UnboundedSender<ServerMessage>;

/// Live identifier → channel bindings. Written only on open and close.
pub(crate) struct ConnectionRegistry {
    channels: DashMap<PeerId, Outbox>,
}

impl ConnectionRegistry {
    pub(crate) fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    /// Mints a fresh identifier, announces it on `outbox` and binds it.
    ///
    /// The announcement is queued while the map slot is still vacant, so no
    /// routed frame can reach the channel ahead of it.
    pub(crate) fn bind(&self, outbox: Outbox) -> PeerId {
        loop {
            let peer_id = PeerId::new();
            let Entry::Vacant(slot) = self.channels.entry(peer_id.clone()) else {
                continue;
            };

            let hello = ServerMessage::IdentityAssigned {
                id: peer_id.clone(),
            };
            if outbox.send(hello).is_err() {
                debug!("Channel {} closed before its identity was sent", peer_id);
            }

            slot.insert(outbox);
            return peer_id;
        }
    }

    pub(crate) fn unbind(&self, peer_id: &PeerId) -> bool {
        self.channels.remove(peer_id).is_some()
    }

    /// Queues `msg` for `peer_id`. Returns `false` when nothing is bound there.
    pub(crate) fn send(&self, peer_id: &PeerId, msg: ServerMessage) -> bool {
        let Some(outbox) = self.channels.get(peer_id) else {
            return false;
        };
        if let Err(e) = outbox.send(msg) {
            error!("Failed to queue message for {}: {:?}", peer_id, e);
        }
        true
    }

    pub(crate) fn broadcast(&self, msg: &ServerMessage) -> usize {
        let mut delivered = 0;
        for entry in self.channels.iter() {
            if entry.value().send(msg.clone()).is_ok() {
                delivered += 1;
            }
        }
        delivered
    }

    pub(crate) fn len(&self) -> usize {
        self.channels.len()
    }

    pub(crate) fn contains(&self, peer_id: &PeerId) -> bool {
        self.channels.contains_key(peer_id)
    }
}
