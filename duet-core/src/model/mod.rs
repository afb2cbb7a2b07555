mod peer;
mod signal;
mod signaling;

pub use peer::PeerId;
pub use signal::SignalPayload;
pub use signaling::{ClientMessage, ServerMessage};
