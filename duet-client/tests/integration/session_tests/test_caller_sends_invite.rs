use crate::integration::init_tracing;
use crate::utils::*;
use duet_client::{CallState, ClientError, Role};
use duet_core::{ClientMessage, PeerId, ServerMessage};

#[tokio::test]
async fn test_call_sends_invite_with_offer() {
    init_tracing();

    let mut s = SessionUnderTest::new("Alice");
    let alice_id = PeerId::from("alice-id");
    let bob_id = PeerId::from("bob-id");

    s.session
        .handle_server_message(ServerMessage::IdentityAssigned {
            id: alice_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(s.session.local_id(), Some(&alice_id));

    s.session.select_role(Role::Caller).await.unwrap();
    s.session.call(bob_id.clone()).await.unwrap();
    assert_eq!(
        s.state(),
        &CallState::Calling {
            target: bob_id.clone()
        }
    );
    assert!(s.session.has_peer());

    s.pump_peer_events().await;

    let sent = s.sent();
    assert_eq!(sent.len(), 1, "exactly one invite expected: {:?}", sent);
    match &sent[0] {
        ClientMessage::Invite {
            target_id,
            signal,
            from_id,
            from_name,
        } => {
            assert_eq!(target_id, &bob_id);
            assert_eq!(from_id, &alice_id);
            assert_eq!(from_name, "Alice");
            assert_eq!(signal, &mock_offer());
        }
        other => panic!("expected invite, got {:?}", other),
    }
}

#[tokio::test]
async fn test_accept_completes_the_call() {
    init_tracing();

    let mut s = SessionUnderTest::new("Alice");
    let bob_id = PeerId::from("bob-id");

    s.session
        .handle_server_message(ServerMessage::IdentityAssigned {
            id: PeerId::from("alice-id"),
        })
        .await
        .unwrap();
    s.session.select_role(Role::Caller).await.unwrap();
    s.session.call(bob_id.clone()).await.unwrap();
    s.pump_peer_events().await;

    s.session
        .handle_server_message(ServerMessage::AcceptReceived {
            signal: mock_answer(),
        })
        .await
        .unwrap();

    assert_eq!(s.state(), &CallState::InCall { remote: bob_id });
    assert_eq!(s.backend.applied_signals(), vec![mock_answer()]);

    // A second accept is not applied again.
    s.session
        .handle_server_message(ServerMessage::AcceptReceived {
            signal: mock_answer(),
        })
        .await
        .unwrap();
    assert_eq!(s.backend.applied_signals().len(), 1);
}

#[tokio::test]
async fn test_call_needs_identity_and_caller_role() {
    init_tracing();

    let mut s = SessionUnderTest::new("Alice");
    s.session.select_role(Role::Caller).await.unwrap();

    let err = s.session.call(PeerId::from("bob-id")).await.unwrap_err();
    assert!(matches!(err, ClientError::NoIdentity));
    assert_eq!(s.state(), &CallState::Ready);
    assert_eq!(s.backend.peers_created(), 0);

    let mut answerer = SessionUnderTest::new("Bob");
    answerer
        .session
        .handle_server_message(ServerMessage::IdentityAssigned {
            id: PeerId::from("bob-id"),
        })
        .await
        .unwrap();
    answerer.session.select_role(Role::Answerer).await.unwrap();

    let err = answerer
        .session
        .call(PeerId::from("alice-id"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidTransition { .. }));
}
