use anyhow::{Context, Result};
use clap::Parser;
use duet_server::{
    DEFAULT_ALLOWED_ORIGIN, DEFAULT_MAX_MESSAGE_SIZE, DEFAULT_PORT, RelayConfig, serve,
};
use std::net::IpAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "duet-relay")]
#[command(about = "Relays call-signaling messages between two WebRTC peers")]
struct Args {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Origins allowed to open channels; `*` allows any.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGIN
    )]
    allowed_origins: Vec<String>,

    /// Largest accepted frame, in bytes.
    #[arg(long, env = "MAX_MESSAGE_SIZE", default_value_t = DEFAULT_MAX_MESSAGE_SIZE)]
    max_message_size: usize,
}

impl From<Args> for RelayConfig {
    fn from(args: Args) -> Self {
        RelayConfig {
            host: args.host,
            port: args.port,
            allowed_origins: args.allowed_origins,
            max_message_size: args.max_message_size,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RelayConfig::from(Args::parse());
    let addr = config.socket_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    serve(listener, config, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
