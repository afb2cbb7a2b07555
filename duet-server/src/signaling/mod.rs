mod origin_policy;
mod ws_handler;

pub use origin_policy::*;
pub use ws_handler::*;
