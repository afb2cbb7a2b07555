use anyhow::{Context, Result};
use duet_core::{ClientMessage, Frame, PeerId, ServerMessage};
use futures::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use super::signal_helpers::{SIGNAL_TIMEOUT_MS, SILENCE_WINDOW_MS};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Raw WebSocket client speaking the relay protocol.
pub struct TestClient {
    /// Identifier the relay assigned to this channel.
    pub peer_id: PeerId,
    ws: WsStream,
}

impl TestClient {
    /// Connects and consumes the identity frame, failing if anything else
    /// arrives first.
    pub async fn connect(url: &str) -> Result<Self> {
        let (ws, _) = connect_async(url)
            .await
            .context("WebSocket handshake failed")?;

        let mut client = Self {
            peer_id: PeerId::from(""),
            ws,
        };

        match client.recv().await? {
            ServerMessage::IdentityAssigned { id } => client.peer_id = id,
            other => anyhow::bail!("First frame was not identity-assigned: {:?}", other),
        }

        tracing::debug!("[TestClient] Connected as {}", client.peer_id);
        Ok(client)
    }

    pub async fn send(&mut self, msg: &ClientMessage) -> Result<()> {
        self.send_text(&msg.to_json()?).await
    }

    pub async fn send_text(&mut self, text: &str) -> Result<()> {
        self.ws
            .send(Message::Text(text.to_owned().into()))
            .await
            .context("Failed to send frame")
    }

    /// Next protocol frame, skipping control frames.
    pub async fn recv(&mut self) -> Result<ServerMessage> {
        let timeout = Duration::from_millis(SIGNAL_TIMEOUT_MS);

        loop {
            let next = tokio::time::timeout(timeout, self.ws.next())
                .await
                .context("Timeout waiting for frame")?;

            match next {
                Some(Ok(Message::Text(text))) => return Ok(ServerMessage::from_json(&text)?),
                Some(Ok(Message::Close(_))) | None => anyhow::bail!("Connection closed"),
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
            }
        }
    }

    /// Fails if a protocol frame arrives within the silence window.
    pub async fn expect_silence(&mut self) -> Result<()> {
        let window = Duration::from_millis(SILENCE_WINDOW_MS);

        match tokio::time::timeout(window, self.ws.next()).await {
            Err(_) => Ok(()),
            Ok(Some(Ok(Message::Text(text)))) => {
                anyhow::bail!("Expected silence, got {}", text.as_str())
            }
            Ok(other) => anyhow::bail!("Expected silence, got {:?}", other),
        }
    }

    pub async fn close(mut self) -> Result<()> {
        self.ws.close(None).await?;
        Ok(())
    }
}
