use crate::{OriginPolicy, RelayConfig, RelayService, ws_handler};
use axum::{Router, routing::get};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub const HEALTH_RESPONSE: &str = "Server is up and running";

pub struct AppState {
    pub relay: RelayService,
    pub origins: OriginPolicy,
    pub max_message_size: usize,
}

/// Health check on `/`, signaling channel on `/ws`.
pub fn router(config: &RelayConfig, relay: RelayService) -> Router {
    let origins = OriginPolicy::new(&config.allowed_origins);
    let cors = origins.cors_layer();

    let state = Arc::new(AppState {
        relay,
        origins,
        max_message_size: config.max_message_size,
    });

    Router::new()
        .route("/", get(health))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    HEALTH_RESPONSE
}

/// Runs the relay on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, config: RelayConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(&config, RelayService::new());

    info!("Signaling relay listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Signaling relay stopped");
    Ok(())
}
