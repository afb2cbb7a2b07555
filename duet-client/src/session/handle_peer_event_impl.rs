use crate::backend::{CallBackend, PeerEvent, PeerMode};
use crate::error::ClientError;
use crate::session::{CallSession, CallState, SessionEvent};
use duet_core::{ClientMessage, SignalPayload};
use tracing::{debug, info};

impl<B: CallBackend> CallSession<B> {
    pub async fn handle_peer_event(
        &mut self,
        event: PeerEvent<B::RemoteStream>,
    ) -> Result<(), ClientError> {
        match event {
            PeerEvent::Signal(signal) => self.forward_local_signal(signal),

            PeerEvent::Stream(stream) => {
                info!("Remote media arrived");
                self.emit(SessionEvent::RemoteStream(stream));
                Ok(())
            }

            PeerEvent::Closed => {
                if self.state.is_in_call() {
                    info!("Peer transport closed");
                    self.end_call().await;
                }
                Ok(())
            }
        }
    }

    /// Only the first local signal of a peer is relayed: it becomes the
    /// invite for an initiator and the accept for a responder.
    fn forward_local_signal(&mut self, signal: SignalPayload) -> Result<(), ClientError> {
        if self.signal_sent {
            debug!("Dropping extra local signal");
            return Ok(());
        }

        let msg = match (&self.state, self.peer_mode) {
            (CallState::Calling { target }, Some(PeerMode::Initiator)) => {
                let Some(from_id) = self.local_id.clone() else {
                    return Err(ClientError::NoIdentity);
                };
                ClientMessage::Invite {
                    target_id: target.clone(),
                    signal,
                    from_id,
                    from_name: self.display_name.clone(),
                }
            }
            (CallState::InCall { remote }, Some(PeerMode::Responder)) => ClientMessage::Accept {
                signal,
                to_id: remote.clone(),
            },
            _ => {
                debug!("Dropping local signal while {}", self.state);
                return Ok(());
            }
        };

        self.send_to_relay(msg)?;
        self.signal_sent = true;
        Ok(())
    }
}
