use crate::session::Role;
use duet_core::PeerId;

/// User actions fed into a running session.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    SelectRole(Role),
    SetDisplayName(String),
    Call { target: PeerId },
    Accept,
    /// Hang up. A spawned session stops afterwards and closes its channel.
    Leave,
    Reset,
}
