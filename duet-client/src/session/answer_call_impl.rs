use crate::backend::{CallBackend, PeerConnection, PeerMode};
use crate::error::ClientError;
use crate::session::{CallSession, CallState};
use tracing::{info, warn};

impl<B: CallBackend> CallSession<B> {
    /// Ringing → InCall. The stored offer is applied right away; the accept
    /// frame follows when the peer connection produces its answer.
    pub async fn accept(&mut self) -> Result<(), ClientError> {
        let CallState::Ringing { from, .. } = &self.state else {
            return Err(self.invalid("accept a call"));
        };
        let from = from.clone();
        let Some(offer) = self.pending_offer.take() else {
            return Err(self.invalid("accept a call"));
        };

        if let Err(e) = self.open_peer(PeerMode::Responder).await {
            self.pending_offer = Some(offer);
            return Err(e);
        }

        let applied = match self.peer.as_ref() {
            Some(peer) => peer.signal(offer).await,
            None => Err(ClientError::Peer("peer connection vanished".to_owned())),
        };
        if let Err(e) = applied {
            warn!("Failed to apply offer from {}: {}", from, e);
            self.close_peer().await;
            self.set_state(CallState::Ready);
            return Err(e);
        }

        info!("Accepted call from {}", from);
        self.set_state(CallState::InCall { remote: from });
        Ok(())
    }
}
