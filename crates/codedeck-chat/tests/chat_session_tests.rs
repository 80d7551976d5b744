/// Integration tests for the chat session against a mocked assistant API
use std::sync::Arc;

use codedeck_chat::{ChatMessage, ChatRole, ChatSession, GeminiClient};

fn client_against(server: &mockito::ServerGuard) -> GeminiClient {
    GeminiClient::new("test-key".to_string())
        .expect("non-empty key")
        .with_base_url(server.url())
        .with_model("gemini-test".to_string())
}

#[tokio::test]
async fn a_turn_appends_both_messages_to_the_transcript() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/gemini-test:generateContent?key=test-key")
        .with_status(200)
        .with_body(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Use a for loop."}]}}]}"#,
        )
        .create_async()
        .await;

    let mut session = ChatSession::new(client_against(&server));
    let answer = session.send_message("How do I iterate?").await;

    mock.assert_async().await;
    assert_eq!(answer.role, ChatRole::Model);
    assert_eq!(answer.text, "Use a for loop.");
    // greeting + user + model
    assert_eq!(session.transcript().len(), 3);
    assert_eq!(
        session.transcript()[1],
        ChatMessage::user("How do I iterate?")
    );
}

#[tokio::test]
async fn request_failure_becomes_an_apology_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/gemini-test:generateContent?key=test-key")
        .with_status(500)
        .with_body("{}")
        .create_async()
        .await;

    let mut session = ChatSession::new(client_against(&server));
    let answer = session.send_message("hello").await;

    assert_eq!(answer.text, "Sorry, I encountered an error. Please try again.");
    assert_eq!(session.transcript().len(), 3);
}

#[tokio::test]
async fn empty_candidates_surface_as_the_apology() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/gemini-test:generateContent?key=test-key")
        .with_status(200)
        .with_body(r#"{"candidates":[]}"#)
        .create_async()
        .await;

    let mut session = ChatSession::new(client_against(&server));
    let answer = session.send_message("hello").await;

    assert_eq!(answer.text, "Sorry, I encountered an error. Please try again.");
}

#[tokio::test]
async fn client_rejects_an_empty_key() {
    // The client carries the credential, so it has no Debug impl; discard
    // the success value before unwrapping the error.
    let err = GeminiClient::new(String::new())
        .map(|_| ())
        .expect_err("empty key must be rejected");
    assert_eq!(err.to_string(), "Configuration error: API key is required");
}

#[tokio::test]
async fn client_sends_the_full_transcript() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/gemini-test:generateContent?key=test-key")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::Regex("How can I help you".to_string()),
            mockito::Matcher::Regex("first question".to_string()),
            mockito::Matcher::Regex(r#""role":"user""#.to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let client = Arc::new(reqwest::Client::new());
    let client = GeminiClient::with_client(client, "test-key".to_string())
        .expect("non-empty key")
        .with_base_url(server.url())
        .with_model("gemini-test".to_string());

    let mut session = ChatSession::new(client);
    session.send_message("first question").await;

    mock.assert_async().await;
}
