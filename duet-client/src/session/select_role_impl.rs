use crate::backend::CallBackend;
use crate::error::ClientError;
use crate::session::{CallSession, CallState, Role, SessionEvent};
use tracing::warn;

impl<B: CallBackend> CallSession<B> {
    /// Records the role and asks for local media. A denial leaves the session
    /// in `AwaitingLocalMedia`; selecting a role again is the retry.
    pub async fn select_role(&mut self, role: Role) -> Result<(), ClientError> {
        if !matches!(
            self.state,
            CallState::Idle | CallState::AwaitingLocalMedia
        ) {
            return Err(self.invalid("select a role"));
        }

        self.role = Some(role);
        self.set_state(CallState::AwaitingLocalMedia);

        match self.backend.request_media().await {
            Ok(stream) => {
                self.stream = Some(stream);
                self.set_state(CallState::Ready);
                Ok(())
            }
            Err(e) => {
                warn!("Local media request failed: {}", e);
                self.emit(SessionEvent::MediaDenied(e.to_string()));
                Err(e)
            }
        }
    }
}
