use crate::session::CallState;
use duet_core::ProtocolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("local media unavailable: {0}")]
    MediaDenied(String),

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: CallState,
    },

    #[error("no identity assigned by the relay yet")]
    NoIdentity,

    #[error("signaling channel closed")]
    NotConnected,

    #[error("call session has stopped")]
    SessionClosed,

    #[error("peer connection failed: {0}")]
    Peer(String),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Rtc(#[from] webrtc::Error),

    #[error(transparent)]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}
