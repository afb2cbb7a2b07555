use crate::model::peer::PeerId;
use crate::model::signal::SignalPayload;
use crate::traits::Frame;
use serde::{Deserialize, Serialize};

/// Frames a client sends to the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "d", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// Place a call: deliver `signal` (the offer) to `target_id`.
    #[serde(rename_all = "camelCase")]
    Invite {
        target_id: PeerId,
        signal: SignalPayload,
        from_id: PeerId,
        #[serde(default)]
        from_name: String,
    },

    /// Answer a call: deliver `signal` (the answer) back to the caller.
    #[serde(rename_all = "camelCase")]
    Accept { signal: SignalPayload, to_id: PeerId },
}

/// Frames the relay sends to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "d", rename_all = "kebab-case")]
pub enum ServerMessage {
    /// Always the first frame on a channel.
    IdentityAssigned { id: PeerId },

    #[serde(rename_all = "camelCase")]
    InviteReceived {
        signal: SignalPayload,
        from_id: PeerId,
        #[serde(default)]
        from_name: String,
    },

    AcceptReceived { signal: SignalPayload },

    /// Some other channel closed. Broadcast, not addressed.
    CallEnded,
}

impl Frame for ClientMessage {}

impl Frame for ServerMessage {}
