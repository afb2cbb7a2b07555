use crate::backend::{PeerConnection, PeerEvent, PeerEventSender, PeerMode};
use crate::error::ClientError;
use crate::rtc::{LocalTracks, PeerConfig};
use async_trait::async_trait;
use duet_core::SignalPayload;
use std::sync::Arc;
use tracing::{debug, info, warn};
use webrtc::api::APIBuilder;
use webrtc::api::interceptor_registry::register_default_interceptors;
use webrtc::api::media_engine::MediaEngine;
use webrtc::ice_transport::ice_server::RTCIceServer;
use webrtc::interceptor::registry::Registry;
use webrtc::peer_connection::RTCPeerConnection;
use webrtc::peer_connection::configuration::RTCConfiguration;
use webrtc::peer_connection::peer_connection_state::RTCPeerConnectionState;
use webrtc::peer_connection::sdp::sdp_type::RTCSdpType;
use webrtc::peer_connection::sdp::session_description::RTCSessionDescription;
use webrtc::track::track_remote::TrackRemote;

/// A `webrtc` peer connection negotiated without trickle ICE: every signal it
/// emits is a complete session description with all candidates gathered.
pub struct RtcPeer {
    mode: PeerMode,
    peer_connection: Arc<RTCPeerConnection>,
    events: PeerEventSender<Arc<TrackRemote>>,
}

impl RtcPeer {
    /// Builds the connection and attaches `tracks`. An initiator starts
    /// negotiating immediately and emits its offer on `events`.
    pub async fn new(
        mode: PeerMode,
        config: &PeerConfig,
        tracks: &LocalTracks,
        events: PeerEventSender<Arc<TrackRemote>>,
    ) -> Result<Self, ClientError> {
        let peer_connection = Arc::new(build_connection(config).await?);
        let peer = Self {
            mode,
            peer_connection,
            events,
        };

        let started = peer.start(tracks).await;
        peer.close_on_error(started).await?;
        Ok(peer)
    }

    /// Passes `result` through, closing the connection first if it is an
    /// error.
    async fn close_on_error<T>(&self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(e) = &result {
            warn!("Peer connection setup failed: {}", e);
            self.destroy().await;
        }
        result
    }

    async fn start(&self, tracks: &LocalTracks) -> Result<(), ClientError> {
        let track_tx = self.events.clone();
        self.peer_connection
            .on_track(Box::new(move |track, _receiver, _transceiver| {
                let tx = track_tx.clone();
                Box::pin(async move {
                    debug!("Remote track {} ({})", track.id(), track.kind());
                    let _ = tx.send(PeerEvent::Stream(track));
                })
            }));

        let state_tx = self.events.clone();
        self.peer_connection.on_peer_connection_state_change(Box::new(
            move |s: RTCPeerConnectionState| {
                let tx = state_tx.clone();
                Box::pin(async move {
                    info!("Peer connection state changed: {:?}", s);
                    if ends_call(s) {
                        let _ = tx.send(PeerEvent::Closed);
                    }
                })
            },
        ));

        for track in tracks.tracks() {
            self.peer_connection.add_track(Arc::clone(track)).await?;
        }

        if self.mode == PeerMode::Initiator {
            let offer = self.peer_connection.create_offer(None).await?;
            self.publish_local_description(offer).await?;
        }

        Ok(())
    }

    /// Sets `desc` locally, waits for ICE gathering and emits the result.
    async fn publish_local_description(&self, desc: RTCSessionDescription) -> Result<(), ClientError> {
        let mut gathering_done = self.peer_connection.gathering_complete_promise().await;
        self.peer_connection.set_local_description(desc).await?;
        let _ = gathering_done.recv().await;

        let Some(local) = self.peer_connection.local_description().await else {
            return Err(ClientError::Peer("no local description after gathering".to_owned()));
        };

        let signal = SignalPayload::encode(&local)?;
        let _ = self.events.send(PeerEvent::Signal(signal));
        Ok(())
    }
}

/// Disconnected is not terminal: ICE may still recover from it.
fn ends_call(state: RTCPeerConnectionState) -> bool {
    matches!(
        state,
        RTCPeerConnectionState::Failed | RTCPeerConnectionState::Closed
    )
}

async fn build_connection(config: &PeerConfig) -> Result<RTCPeerConnection, ClientError> {
    let mut m = MediaEngine::default();
    m.register_default_codecs()?;
    let registry = register_default_interceptors(Registry::new(), &mut m)?;

    let api = APIBuilder::new()
        .with_media_engine(m)
        .with_interceptor_registry(registry)
        .build();

    let ice_servers = if config.ice_servers.is_empty() {
        vec![]
    } else {
        vec![RTCIceServer {
            urls: config.ice_servers.clone(),
            ..Default::default()
        }]
    };

    let rtc_config = RTCConfiguration {
        ice_servers,
        ..Default::default()
    };

    Ok(api.new_peer_connection(rtc_config).await?)
}

#[async_trait]
impl PeerConnection for RtcPeer {
    async fn signal(&self, payload: SignalPayload) -> Result<(), ClientError> {
        let desc: RTCSessionDescription = payload.decode()?;
        let sdp_type = desc.sdp_type;

        self.peer_connection.set_remote_description(desc).await?;

        if self.mode == PeerMode::Responder && sdp_type == RTCSdpType::Offer {
            let answer = self.peer_connection.create_answer(None).await?;
            self.publish_local_description(answer).await?;
        }

        Ok(())
    }

    async fn destroy(&self) {
        if let Err(e) = self.peer_connection.close().await {
            warn!("Failed to close peer connection: {}", e);
        }
    }
}
