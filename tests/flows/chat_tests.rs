//! Chat Flow Tests
//!
//! Direct-message rooms and message delivery through the wired core.

use chat_core::application::dto::SendMessageCommand;
use chat_core::application::services::ChatUseCase;
use chat_core::domain::value_objects::{ChatText, RoomId, UserId};

use crate::common::test_application;

fn user(id: &str) -> UserId {
    UserId::new(id).expect("valid user id")
}

fn message_command(room_id: RoomId, sender_id: UserId, text: &str) -> SendMessageCommand {
    SendMessageCommand {
        room_id,
        sender_id,
        content: ChatText::new(text).expect("valid text"),
    }
}

#[tokio::test]
async fn test_join_open_room_and_send_message() {
    let app = test_application();
    let alice = user("alice");
    let bob = user("bob");

    app.chat.join(alice.clone(), "Alice").await.expect("alice joins");
    app.chat.join(bob.clone(), "Bob").await.expect("bob joins");

    let room = app
        .chat
        .get_or_create_room(alice.clone(), bob.clone())
        .await
        .expect("room opens");

    let sent = app
        .chat
        .send_message(message_command(room.id().clone(), alice.clone(), "hi bob"))
        .await
        .expect("message sends");
    assert_eq!(sent.sender_id(), &alice);
    assert_eq!(sent.content().as_str(), "hi bob");

    // The message is on the persisted room, not just the returned copy.
    let reloaded = app
        .chat
        .get_or_create_room(bob, alice)
        .await
        .expect("room reloads");
    assert_eq!(reloaded.messages().len(), 1);
    assert_eq!(reloaded.messages()[0].id(), sent.id());
}

#[tokio::test]
async fn test_room_is_shared_regardless_of_initiator() {
    let app = test_application();
    let alice = user("alice");
    let bob = user("bob");

    let first = app
        .chat
        .get_or_create_room(alice.clone(), bob.clone())
        .await
        .expect("room opens");
    let second = app
        .chat
        .get_or_create_room(bob, alice)
        .await
        .expect("room reopens");

    assert_eq!(first.id(), second.id());
    assert_eq!(first.id().as_str(), "chat:alice:bob");
}

#[tokio::test]
async fn test_joining_twice_is_rejected() {
    let app = test_application();
    let alice = user("alice");

    app.chat.join(alice.clone(), "Alice").await.expect("alice joins");

    let error = app
        .chat
        .join(alice, "Alice")
        .await
        .expect_err("second join");
    assert_eq!(error.code(), "USER_ALREADY_CONNECTED");
}

#[tokio::test]
async fn test_leaving_frees_the_connection() {
    let app = test_application();
    let alice = user("alice");

    app.chat.join(alice.clone(), "Alice").await.expect("alice joins");
    app.chat.leave(&alice).await.expect("alice leaves");
    app.chat.join(alice, "Alice").await.expect("alice rejoins");
}

#[tokio::test]
async fn test_outsider_cannot_send_into_room() {
    let app = test_application();
    let alice = user("alice");
    let bob = user("bob");
    let mallory = user("mallory");

    let room = app
        .chat
        .get_or_create_room(alice, bob)
        .await
        .expect("room opens");

    let error = app
        .chat
        .send_message(message_command(room.id().clone(), mallory, "let me in"))
        .await
        .expect_err("outsider send");
    assert_eq!(error.code(), "SENDER_NOT_PARTICIPANT");
}

#[tokio::test]
async fn test_sending_into_unknown_room_is_rejected() {
    let app = test_application();
    let alice = user("alice");
    let bob = user("bob");

    let never_opened = RoomId::of(&alice, &bob).expect("valid room id");
    let error = app
        .chat
        .send_message(message_command(never_opened, alice, "anyone here?"))
        .await
        .expect_err("unknown room");
    assert_eq!(error.code(), "ROOM_NOT_FOUND");
}
