mod backend;
mod error;
mod rtc;
mod session;
mod signaling;

pub use backend::*;
pub use error::*;
pub use rtc::*;
pub use session::*;
pub use signaling::*;
