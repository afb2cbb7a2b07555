use crate::relay::connection_registry::{ConnectionRegistry, Outbox};
use duet_core::{ClientMessage, PeerId, ServerMessage};
use std::sync::Arc;
use tracing::{debug, info, warn};

struct RelayInner {
    registry: ConnectionRegistry,
}

/// Routes handshake frames between channels by identifier.
///
/// Holds no pairing state: an invite or accept is delivered to whatever
/// channel is bound to the addressed id, or dropped without a reply.
#[derive(Clone)]
pub struct RelayService {
    inner: Arc<RelayInner>,
}

impl RelayService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RelayInner {
                registry: ConnectionRegistry::new(),
            }),
        }
    }

    /// Registers a new channel and returns its identifier. The
    /// identity-assigned frame is already queued on `outbox` when this returns.
    pub fn open_channel(&self, outbox: Outbox) -> PeerId {
        let peer_id = self.inner.registry.bind(outbox);
        debug!(
            "Bound {} ({} channels open)",
            peer_id,
            self.inner.registry.len()
        );
        peer_id
    }

    /// Unbinds `peer_id` and tells every remaining channel a call ended.
    pub fn close_channel(&self, peer_id: &PeerId) {
        if !self.inner.registry.unbind(peer_id) {
            return;
        }

        let notified = self.inner.registry.broadcast(&ServerMessage::CallEnded);
        info!("Channel {} closed, notified {} peers", peer_id, notified);
    }

    pub fn handle_message(&self, origin: &PeerId, msg: ClientMessage) {
        match msg {
            ClientMessage::Invite {
                target_id,
                signal,
                from_id,
                from_name,
            } => {
                if &from_id != origin {
                    warn!(
                        "Invite from {} claims to come from {}, using bound id",
                        origin, from_id
                    );
                }

                let forward = ServerMessage::InviteReceived {
                    signal,
                    from_id: origin.clone(),
                    from_name,
                };
                if self.inner.registry.send(&target_id, forward) {
                    debug!("Invite {} -> {}", origin, target_id);
                } else {
                    debug!("Dropping invite from {} to unbound {}", origin, target_id);
                }
            }

            ClientMessage::Accept { signal, to_id } => {
                let forward = ServerMessage::AcceptReceived { signal };
                if self.inner.registry.send(&to_id, forward) {
                    debug!("Accept {} -> {}", origin, to_id);
                } else {
                    debug!("Dropping accept from {} to unbound {}", origin, to_id);
                }
            }
        }
    }

    pub fn connected_count(&self) -> usize {
        self.inner.registry.len()
    }

    pub fn is_connected(&self, peer_id: &PeerId) -> bool {
        self.inner.registry.contains(peer_id)
    }
}

impl Default for RelayService {
    fn default() -> Self {
        Self::new()
    }
}
