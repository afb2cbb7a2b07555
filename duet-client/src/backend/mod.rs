use crate::error::ClientError;
use async_trait::async_trait;
use duet_core::SignalPayload;
use tokio::sync::mpsc;

/// Which side of the offer/answer exchange a peer connection plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerMode {
    /// Produces the offer as soon as it is created.
    Initiator,
    /// Waits for the remote offer and produces the answer.
    Responder,
}

/// What a peer connection reports back to the session that owns it.
#[derive(Debug)]
pub enum PeerEvent<R> {
    /// Local negotiation data to relay to the remote party.
    Signal(SignalPayload),
    /// Remote media arrived.
    Stream(R),
    /// The transport failed or was closed underneath us.
    Closed,
}

pub type PeerEventSender<R> = mpsc::UnboundedSender<PeerEvent<R>>;

#[async_trait]
pub trait PeerConnection: Send + Sync + 'static {
    /// Apply a signal received from the remote party.
    async fn signal(&self, payload: SignalPayload) -> Result<(), ClientError>;

    /// Release every transport resource held by this connection.
    async fn destroy(&self);
}

/// Platform pieces a call session drives: local media and peer connections.
#[async_trait]
pub trait CallBackend: Send + Sync + 'static {
    type Stream: Send + Sync + 'static;
    type RemoteStream: Send + 'static;
    type Peer: PeerConnection;

    async fn request_media(&self) -> Result<Self::Stream, ClientError>;

    /// Builds a peer connection bound to `stream`. An initiator must emit its
    /// offer on `events` without further prompting.
    async fn create_peer(
        &self,
        mode: PeerMode,
        stream: &Self::Stream,
        events: PeerEventSender<Self::RemoteStream>,
    ) -> Result<Self::Peer, ClientError>;

    fn release_media(&self, stream: Self::Stream);
}
