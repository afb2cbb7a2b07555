use crate::backend::{CallBackend, PeerMode};
use crate::error::ClientError;
use crate::session::{CallSession, CallState, Role};
use duet_core::PeerId;
use tracing::info;

impl<B: CallBackend> CallSession<B> {
    /// Ready → Calling. The invite goes out once the new peer connection
    /// produces its offer.
    pub async fn call(&mut self, target: PeerId) -> Result<(), ClientError> {
        if self.state != CallState::Ready || self.role != Some(Role::Caller) {
            return Err(self.invalid("place a call"));
        }
        if self.local_id.is_none() {
            return Err(ClientError::NoIdentity);
        }

        info!("Calling {}", target);
        self.open_peer(PeerMode::Initiator).await?;
        self.set_state(CallState::Calling { target });
        Ok(())
    }
}
