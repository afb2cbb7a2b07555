mod connection_registry;
mod relay_service;

pub use connection_registry::Outbox;
pub use relay_service::*;
