use crate::session::CallState;
use duet_core::PeerId;

/// Notifications for whatever renders the session.
#[derive(Debug)]
pub enum SessionEvent<R> {
    IdentityAssigned(PeerId),
    StateChanged(CallState),
    IncomingCall { from: PeerId, from_name: String },
    MediaDenied(String),
    RemoteStream(R),
    CallEnded,
}
