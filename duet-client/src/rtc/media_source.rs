use crate::error::ClientError;
use async_trait::async_trait;
use std::sync::Arc;
use webrtc::track::track_local::TrackLocal;

pub type LocalTrack = Arc<dyn TrackLocal + Send + Sync>;

/// Tracks a call sends to the remote party.
#[derive(Clone, Default)]
pub struct LocalTracks(pub Vec<LocalTrack>);

impl LocalTracks {
    pub fn tracks(&self) -> &[LocalTrack] {
        &self.0
    }
}

/// Where local audio/video comes from (camera, microphone, a file, ...).
#[async_trait]
pub trait MediaSource: Send + Sync + 'static {
    async fn open(&self) -> Result<LocalTracks, ClientError>;

    /// Stop capturing into `tracks`.
    fn close(&self, _tracks: LocalTracks) {}
}

/// A fixed set of tracks fed by the application itself.
#[async_trait]
impl MediaSource for LocalTracks {
    async fn open(&self) -> Result<LocalTracks, ClientError> {
        Ok(self.clone())
    }
}
