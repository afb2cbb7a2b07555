use crate::backend::{CallBackend, PeerEvent, PeerMode};
use crate::error::ClientError;
use duet_core::{ClientMessage, PeerId, ServerMessage, SignalPayload};
use tokio::sync::mpsc;
use tracing::{info, warn};

mod answer_call_impl;
mod call_state;
mod handle_peer_event_impl;
mod handle_server_impl;
mod peer_lifecycle_impl;
mod place_call_impl;
mod select_role_impl;
mod session_command;
mod session_event;
mod session_handle;

pub use call_state::*;
pub use session_command::*;
pub use session_event::*;
pub use session_handle::*;

type PeerEventReceiver<R> = mpsc::UnboundedReceiver<PeerEvent<R>>;

/// One end user's side of the call handshake.
///
/// Owns at most one local media stream and one peer connection at a time and
/// releases both when the call ends. Nothing here knows about rendering: user
/// actions come in as method calls or [`SessionCommand`]s, relay frames as
/// [`ServerMessage`]s, and everything worth showing goes out as
/// [`SessionEvent`]s.
pub struct CallSession<B: CallBackend> {
    backend: B,
    display_name: String,
    local_id: Option<PeerId>,
    role: Option<Role>,
    state: CallState,
    stream: Option<B::Stream>,
    peer: Option<B::Peer>,
    peer_mode: Option<PeerMode>,
    peer_rx: Option<PeerEventReceiver<B::RemoteStream>>,
    pending_offer: Option<SignalPayload>,
    signal_sent: bool,
    outbox: mpsc::UnboundedSender<ClientMessage>,
    events: mpsc::UnboundedSender<SessionEvent<B::RemoteStream>>,
}

impl<B: CallBackend> CallSession<B> {
    pub fn new(
        backend: B,
        display_name: impl Into<String>,
        outbox: mpsc::UnboundedSender<ClientMessage>,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent<B::RemoteStream>>) {
        let (events, events_rx) = mpsc::unbounded_channel();

        let session = Self {
            backend,
            display_name: display_name.into(),
            local_id: None,
            role: None,
            state: CallState::Idle,
            stream: None,
            peer: None,
            peer_mode: None,
            peer_rx: None,
            pending_offer: None,
            signal_sent: false,
            outbox,
            events,
        };
        (session, events_rx)
    }

    pub fn state(&self) -> &CallState {
        &self.state
    }

    pub fn local_id(&self) -> Option<&PeerId> {
        self.local_id.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }

    pub fn has_peer(&self) -> bool {
        self.peer.is_some()
    }

    pub fn has_local_media(&self) -> bool {
        self.stream.is_some()
    }

    /// Next event from the current peer connection, if there is one. Lets a
    /// caller step the session by hand instead of through [`run`](Self::run).
    #[doc(hidden)]
    pub async fn next_peer_event(&mut self) -> Option<PeerEvent<B::RemoteStream>> {
        if self.peer_rx.is_none() {
            return None;
        }
        Self::recv_peer_event(&mut self.peer_rx).await
    }

    pub async fn handle_command(&mut self, cmd: SessionCommand) -> Result<(), ClientError> {
        match cmd {
            SessionCommand::SelectRole(role) => self.select_role(role).await,
            SessionCommand::SetDisplayName(name) => {
                self.set_display_name(name);
                Ok(())
            }
            SessionCommand::Call { target } => self.call(target).await,
            SessionCommand::Accept => self.accept().await,
            SessionCommand::Leave => self.leave().await,
            SessionCommand::Reset => self.reset(),
        }
    }

    /// Drives the session until the user leaves, the command side goes away
    /// or the signaling channel closes. Resources are released on the way out.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<SessionCommand>,
        mut inbound: mpsc::UnboundedReceiver<ServerMessage>,
    ) {
        info!("Call session started");

        loop {
            tokio::select! {
                cmd = commands.recv() => {
                    match cmd {
                        Some(SessionCommand::Leave) => {
                            if let Err(e) = self.leave().await {
                                warn!("Leave failed: {}", e);
                                continue;
                            }
                            break;
                        }
                        Some(c) => {
                            if let Err(e) = self.handle_command(c).await {
                                warn!("Command rejected: {}", e);
                            }
                        }
                        None => {
                            info!("Command channel closed. Shutting down session.");
                            break;
                        }
                    }
                }

                msg = inbound.recv() => {
                    match msg {
                        Some(m) => {
                            if let Err(e) = self.handle_server_message(m).await {
                                warn!("Failed to handle relay message: {}", e);
                            }
                        }
                        None => {
                            warn!("Signaling channel closed");
                            if self.state.is_active_call() {
                                self.end_call().await;
                            }
                            break;
                        }
                    }
                }

                Some(evt) = Self::recv_peer_event(&mut self.peer_rx) => {
                    if let Err(e) = self.handle_peer_event(evt).await {
                        warn!("Failed to handle peer event: {}", e);
                    }
                }
            }
        }

        self.release().await;
        info!("Call session finished");
    }

    /// Runs the session on its own task.
    pub fn spawn(self, inbound: mpsc::UnboundedReceiver<ServerMessage>) -> SessionHandle {
        let (commands_tx, commands_rx) = mpsc::channel(32);
        let task = tokio::spawn(self.run(commands_rx, inbound));
        SessionHandle::new(commands_tx, task)
    }

    async fn recv_peer_event(
        rx: &mut Option<PeerEventReceiver<B::RemoteStream>>,
    ) -> Option<PeerEvent<B::RemoteStream>> {
        match rx {
            Some(rx) => rx.recv().await,
            None => std::future::pending().await,
        }
    }

    fn set_state(&mut self, state: CallState) {
        if self.state == state {
            return;
        }
        info!("Call state: {} -> {}", self.state, state);
        self.state = state.clone();
        self.emit(SessionEvent::StateChanged(state));
    }

    fn emit(&self, event: SessionEvent<B::RemoteStream>) {
        let _ = self.events.send(event);
    }

    fn send_to_relay(&self, msg: ClientMessage) -> Result<(), ClientError> {
        self.outbox
            .send(msg)
            .map_err(|_| ClientError::NotConnected)
    }

    fn invalid(&self, action: &'static str) -> ClientError {
        ClientError::InvalidTransition {
            action,
            state: self.state.clone(),
        }
    }
}
