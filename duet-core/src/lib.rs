pub mod error;
pub mod model;
pub mod traits;

pub use error::ProtocolError;
pub use model::{ClientMessage, PeerId, ServerMessage, SignalPayload};
pub use traits::Frame;
