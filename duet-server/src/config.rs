use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// Relay server settings.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Browser origins allowed to reach the relay. `*` allows any.
    pub allowed_origins: Vec<String>,
    /// Largest accepted WebSocket message, in bytes.
    pub max_message_size: usize,
}

impl RelayConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_owned()],
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}
