mod app;
mod config;
mod relay;
mod signaling;

pub use app::*;
pub use config::*;
pub use relay::*;
pub use signaling::*;
