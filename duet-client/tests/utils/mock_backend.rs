use async_trait::async_trait;
use duet_client::{CallBackend, ClientError, PeerConnection, PeerEvent, PeerEventSender, PeerMode};
use duet_core::SignalPayload;
use serde_json::json;
use std::sync::{Arc, Mutex};

pub const MOCK_OFFER_SDP: &str = "v=0 mock-offer";
pub const MOCK_ANSWER_SDP: &str = "v=0 mock-answer";
pub const MOCK_REMOTE_STREAM: &str = "remote-video";

pub fn mock_offer() -> SignalPayload {
    SignalPayload::new(json!({ "type": "offer", "sdp": MOCK_OFFER_SDP }))
}

pub fn mock_answer() -> SignalPayload {
    SignalPayload::new(json!({ "type": "answer", "sdp": MOCK_ANSWER_SDP }))
}

#[derive(Default)]
pub struct MockState {
    pub deny_media: bool,
    pub media_granted: usize,
    pub media_released: usize,
    pub peers_created: usize,
    pub peers_destroyed: usize,
    pub applied_signals: Vec<SignalPayload>,
    pub last_events: Option<PeerEventSender<String>>,
}

/// Backend that fakes media and negotiation with canned offers and answers.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn denying_media() -> Self {
        let backend = Self::default();
        backend.set_deny_media(true);
        backend
    }

    pub fn set_deny_media(&self, deny: bool) {
        self.state.lock().unwrap().deny_media = deny;
    }

    pub fn media_granted(&self) -> usize {
        self.state.lock().unwrap().media_granted
    }

    pub fn media_released(&self) -> usize {
        self.state.lock().unwrap().media_released
    }

    pub fn peers_created(&self) -> usize {
        self.state.lock().unwrap().peers_created
    }

    pub fn peers_destroyed(&self) -> usize {
        self.state.lock().unwrap().peers_destroyed
    }

    pub fn applied_signals(&self) -> Vec<SignalPayload> {
        self.state.lock().unwrap().applied_signals.clone()
    }

    /// Pretend the transport of the latest peer dropped.
    pub fn drop_transport(&self) {
        if let Some(tx) = self.state.lock().unwrap().last_events.as_ref() {
            let _ = tx.send(PeerEvent::Closed);
        }
    }
}

#[derive(Debug)]
pub struct MockStream;

pub struct MockPeer {
    mode: PeerMode,
    events: PeerEventSender<String>,
    state: Arc<Mutex<MockState>>,
}

#[async_trait]
impl PeerConnection for MockPeer {
    async fn signal(&self, payload: SignalPayload) -> Result<(), ClientError> {
        let kind = payload.kind().map(str::to_owned);
        self.state.lock().unwrap().applied_signals.push(payload);

        match (self.mode, kind.as_deref()) {
            (PeerMode::Responder, Some("offer")) => {
                let _ = self.events.send(PeerEvent::Signal(mock_answer()));
                let _ = self.events.send(PeerEvent::Stream(MOCK_REMOTE_STREAM.to_owned()));
                Ok(())
            }
            (PeerMode::Initiator, Some("answer")) => {
                let _ = self.events.send(PeerEvent::Stream(MOCK_REMOTE_STREAM.to_owned()));
                Ok(())
            }
            _ => Err(ClientError::Peer(format!("unexpected signal {:?}", kind))),
        }
    }

    async fn destroy(&self) {
        self.state.lock().unwrap().peers_destroyed += 1;
    }
}

#[async_trait]
impl CallBackend for MockBackend {
    type Stream = MockStream;
    type RemoteStream = String;
    type Peer = MockPeer;

    async fn request_media(&self) -> Result<MockStream, ClientError> {
        let mut state = self.state.lock().unwrap();
        if state.deny_media {
            return Err(ClientError::MediaDenied("permission denied".to_owned()));
        }
        state.media_granted += 1;
        Ok(MockStream)
    }

    async fn create_peer(
        &self,
        mode: PeerMode,
        _stream: &MockStream,
        events: PeerEventSender<String>,
    ) -> Result<MockPeer, ClientError> {
        {
            let mut state = self.state.lock().unwrap();
            state.peers_created += 1;
            state.last_events = Some(events.clone());
        }

        if mode == PeerMode::Initiator {
            let _ = events.send(PeerEvent::Signal(mock_offer()));
        }

        Ok(MockPeer {
            mode,
            events,
            state: Arc::clone(&self.state),
        })
    }

    fn release_media(&self, _stream: MockStream) {
        self.state.lock().unwrap().media_released += 1;
    }
}
