use duet_core::{ClientMessage, PeerId, SignalPayload};
use serde_json::json;

/// Timeout for a single expected frame (ms).
pub const SIGNAL_TIMEOUT_MS: u64 = 5000;

/// How long a client must stay quiet to count as "received nothing" (ms).
pub const SILENCE_WINDOW_MS: u64 = 300;

pub fn offer_signal(sdp: &str) -> SignalPayload {
    SignalPayload::new(json!({ "type": "offer", "sdp": sdp }))
}

pub fn answer_signal(sdp: &str) -> SignalPayload {
    SignalPayload::new(json!({ "type": "answer", "sdp": sdp }))
}

pub fn invite(from: &PeerId, target: &PeerId, name: &str, signal: SignalPayload) -> ClientMessage {
    ClientMessage::Invite {
        target_id: target.clone(),
        signal,
        from_id: from.clone(),
        from_name: name.to_owned(),
    }
}

pub fn accept(to: &PeerId, signal: SignalPayload) -> ClientMessage {
    ClientMessage::Accept {
        signal,
        to_id: to.clone(),
    }
}
