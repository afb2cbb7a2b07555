use crate::backend::{CallBackend, PeerEventSender, PeerMode};
use crate::error::ClientError;
use crate::rtc::{LocalTracks, MediaSource, PeerConfig, RtcPeer};
use async_trait::async_trait;
use std::sync::Arc;
use webrtc::track::track_remote::TrackRemote;

/// [`CallBackend`] over `webrtc` peer connections.
pub struct RtcBackend<M: MediaSource> {
    media: M,
    config: PeerConfig,
}

impl<M: MediaSource> RtcBackend<M> {
    pub fn new(media: M, config: PeerConfig) -> Self {
        Self { media, config }
    }
}

#[async_trait]
impl<M: MediaSource> CallBackend for RtcBackend<M> {
    type Stream = LocalTracks;
    type RemoteStream = Arc<TrackRemote>;
    type Peer = RtcPeer;

    async fn request_media(&self) -> Result<LocalTracks, ClientError> {
        self.media.open().await
    }

    async fn create_peer(
        &self,
        mode: PeerMode,
        stream: &LocalTracks,
        events: PeerEventSender<Arc<TrackRemote>>,
    ) -> Result<RtcPeer, ClientError> {
        RtcPeer::new(mode, &self.config, stream, events).await
    }

    fn release_media(&self, stream: LocalTracks) {
        self.media.close(stream);
    }
}
