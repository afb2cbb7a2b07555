use crate::backend::{CallBackend, PeerConnection};
use crate::error::ClientError;
use crate::session::{CallSession, CallState, SessionEvent};
use duet_core::ServerMessage;
use tracing::{debug, info};

impl<B: CallBackend> CallSession<B> {
    pub async fn handle_server_message(&mut self, msg: ServerMessage) -> Result<(), ClientError> {
        match msg {
            ServerMessage::IdentityAssigned { id } => {
                info!("Relay assigned identity {}", id);
                self.local_id = Some(id.clone());
                self.emit(SessionEvent::IdentityAssigned(id));
            }

            ServerMessage::InviteReceived {
                signal,
                from_id,
                from_name,
            } => {
                if self.state != CallState::Ready {
                    debug!("Ignoring invite from {} while {}", from_id, self.state);
                    return Ok(());
                }

                self.pending_offer = Some(signal);
                self.set_state(CallState::Ringing {
                    from: from_id.clone(),
                    from_name: from_name.clone(),
                });
                self.emit(SessionEvent::IncomingCall {
                    from: from_id,
                    from_name,
                });
            }

            ServerMessage::AcceptReceived { signal } => {
                let CallState::Calling { target } = &self.state else {
                    debug!("Ignoring accept while {}", self.state);
                    return Ok(());
                };
                let target = target.clone();

                let applied = match self.peer.as_ref() {
                    Some(peer) => peer.signal(signal).await,
                    None => Err(ClientError::Peer("no peer connection".to_owned())),
                };
                if let Err(e) = applied {
                    self.end_call().await;
                    return Err(e);
                }

                info!("{} accepted the call", target);
                self.set_state(CallState::InCall { remote: target });
            }

            ServerMessage::CallEnded => {
                if !self.state.is_in_call() {
                    debug!("Ignoring call-ended while {}", self.state);
                    return Ok(());
                }

                info!("Call ended by disconnect notice");
                self.end_call().await;
            }
        }

        Ok(())
    }
}
