mod media_source;
mod peer_config;
mod rtc_backend;
mod rtc_peer;

pub use media_source::*;
pub use peer_config::*;
pub use rtc_backend::*;
pub use rtc_peer::*;
