use crate::error::ClientError;
use crate::session::{Role, SessionCommand};
use duet_core::PeerId;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Command side of a spawned [`CallSession`](crate::CallSession).
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    pub(crate) fn new(commands: mpsc::Sender<SessionCommand>, task: JoinHandle<()>) -> Self {
        Self { commands, task }
    }

    pub async fn send(&self, cmd: SessionCommand) -> Result<(), ClientError> {
        self.commands
            .send(cmd)
            .await
            .map_err(|_| ClientError::SessionClosed)
    }

    pub async fn select_role(&self, role: Role) -> Result<(), ClientError> {
        self.send(SessionCommand::SelectRole(role)).await
    }

    pub async fn call(&self, target: PeerId) -> Result<(), ClientError> {
        self.send(SessionCommand::Call { target }).await
    }

    pub async fn accept(&self) -> Result<(), ClientError> {
        self.send(SessionCommand::Accept).await
    }

    pub async fn leave(&self) -> Result<(), ClientError> {
        self.send(SessionCommand::Leave).await
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the session task to stop.
    pub async fn join(self) {
        drop(self.commands);
        let _ = self.task.await;
    }
}
