use crate::backend::{CallBackend, PeerConnection, PeerMode};
use crate::error::ClientError;
use crate::session::{CallSession, CallState, SessionEvent};
use tokio::sync::mpsc;

impl<B: CallBackend> CallSession<B> {
    pub(super) async fn open_peer(&mut self, mode: PeerMode) -> Result<(), ClientError> {
        let Some(stream) = self.stream.as_ref() else {
            return Err(ClientError::MediaDenied("no local stream".to_owned()));
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let peer = self.backend.create_peer(mode, stream, tx).await?;

        self.peer = Some(peer);
        self.peer_mode = Some(mode);
        self.peer_rx = Some(rx);
        self.signal_sent = false;
        Ok(())
    }

    /// Events still queued from the old connection are discarded with it.
    pub(super) async fn close_peer(&mut self) {
        self.peer_rx = None;
        self.peer_mode = None;
        if let Some(peer) = self.peer.take() {
            peer.destroy().await;
        }
    }

    pub(super) async fn release(&mut self) {
        self.close_peer().await;
        self.pending_offer = None;
        if let Some(stream) = self.stream.take() {
            self.backend.release_media(stream);
        }
    }

    pub(super) async fn end_call(&mut self) {
        self.release().await;
        self.set_state(CallState::Ended);
        self.emit(SessionEvent::CallEnded);
    }

    /// Hangs up from `Calling`, `Ringing` or `InCall`.
    pub async fn leave(&mut self) -> Result<(), ClientError> {
        if !self.state.is_active_call() {
            return Err(self.invalid("leave"));
        }

        self.end_call().await;
        Ok(())
    }

    /// Ended → Idle, keeping the channel and identifier.
    pub fn reset(&mut self) -> Result<(), ClientError> {
        if self.state != CallState::Ended {
            return Err(self.invalid("reset"));
        }

        self.role = None;
        self.set_state(CallState::Idle);
        Ok(())
    }
}
