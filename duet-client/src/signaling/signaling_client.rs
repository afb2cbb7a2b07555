use crate::error::ClientError;
use duet_core::{ClientMessage, Frame, ServerMessage};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, warn};

/// Both directions of an open relay channel.
///
/// Dropping `outbox` closes the socket; `inbound` ends when the relay goes
/// away.
pub struct SignalingChannel {
    pub outbox: mpsc::UnboundedSender<ClientMessage>,
    pub inbound: mpsc::UnboundedReceiver<ServerMessage>,
}

pub struct SignalingClient;

impl SignalingClient {
    /// Opens a channel to the relay at `url` (for example `ws://host:5001/ws`).
    pub async fn connect(url: &str) -> Result<SignalingChannel, ClientError> {
        info!("Connecting to signaling relay: {}", url);
        let (ws, _) = connect_async(url).await?;
        let (mut write, mut read) = ws.split();

        let (outbox, mut outbox_rx) = mpsc::unbounded_channel::<ClientMessage>();
        let (inbound_tx, inbound) = mpsc::unbounded_channel::<ServerMessage>();

        tokio::spawn(async move {
            while let Some(msg) = read.next().await {
                match msg {
                    Ok(Message::Text(text)) => match ServerMessage::from_json(&text) {
                        Ok(msg) => {
                            if inbound_tx.send(msg).is_err() {
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid frame from relay: {}", e),
                    },
                    Ok(Message::Close(_)) => {
                        info!("Relay closed the channel");
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!("Signaling socket error: {}", e);
                        break;
                    }
                }
            }
        });

        tokio::spawn(async move {
            while let Some(msg) = outbox_rx.recv().await {
                let json = match msg.to_json() {
                    Ok(json) => json,
                    Err(e) => {
                        error!("Failed to serialize client message: {}", e);
                        continue;
                    }
                };
                if let Err(e) = write.send(Message::Text(json.into())).await {
                    error!("Failed to send to relay: {}", e);
                    return;
                }
            }

            debug!("Outbox dropped, closing signaling socket");
            let _ = write.close().await;
        });

        Ok(SignalingChannel { outbox, inbound })
    }
}
