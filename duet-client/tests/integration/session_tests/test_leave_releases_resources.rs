use crate::integration::init_tracing;
use crate::utils::*;
use duet_client::{CallState, ClientError, Role};
use duet_core::{PeerId, ServerMessage};

#[tokio::test]
async fn test_leave_while_calling_releases_everything() {
    init_tracing();

    let alice_id = PeerId::from("alice-id");
    let mut s = SessionUnderTest::new("Alice");
    s.session
        .handle_server_message(ServerMessage::IdentityAssigned {
            id: alice_id.clone(),
        })
        .await
        .unwrap();
    s.session.select_role(Role::Caller).await.unwrap();
    s.session.call(PeerId::from("bob-id")).await.unwrap();

    s.session.leave().await.unwrap();

    assert_eq!(s.state(), &CallState::Ended);
    assert!(!s.session.has_peer());
    assert!(!s.session.has_local_media());
    assert_eq!(s.backend.peers_created(), 1);
    assert_eq!(s.backend.peers_destroyed(), 1);
    assert_eq!(s.backend.media_released(), 1);

    // The queued offer died with the peer, so no invite is sent late.
    assert!(s.session.next_peer_event().await.is_none());
    s.pump_peer_events().await;
    assert!(s.sent().is_empty());

    s.session.reset().unwrap();
    assert_eq!(s.state(), &CallState::Idle);
    assert_eq!(s.session.role(), None);
    assert_eq!(s.session.local_id(), Some(&alice_id));

    // A fresh round starts from role selection again.
    s.session.select_role(Role::Caller).await.unwrap();
    assert_eq!(s.state(), &CallState::Ready);
    assert_eq!(s.backend.media_granted(), 2);
}

#[tokio::test]
async fn test_leave_and_reset_need_matching_state() {
    init_tracing();

    let mut s = SessionUnderTest::new("Alice");

    let err = s.session.leave().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidTransition { .. }));

    let err = s.session.reset().unwrap_err();
    assert!(matches!(err, ClientError::InvalidTransition { .. }));

    assert_eq!(s.state(), &CallState::Idle);
}
