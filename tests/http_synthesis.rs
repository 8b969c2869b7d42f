//! HTTP transport tests against a mock synthesis endpoint

#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::console_with;
use mockito::{Matcher, Server};
use tts_console::synthesis::HttpSynthesisClient;
use tts_console::{Error, GenerateOutcome, SynthesisRequest, SynthesisTransport};

fn client_for(server: &mockito::ServerGuard) -> HttpSynthesisClient {
    HttpSynthesisClient::builder()
        .base_url(server.url())
        .build()
        .expect("client")
}

#[tokio::test]
async fn test_posts_json_and_reads_locator() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/tts")
        .match_header("content-type", "application/json")
        .match_header("x-request-id", Matcher::Any)
        .match_body(Matcher::Json(serde_json::json!({
            "text": "Hello world",
            "voice": "nova",
            "format": "mp3"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "url": "/audio/0123456789abcdef01234567.mp3", "urdu_text": "ہیلو دنیا"}"#)
        .create_async()
        .await;

    let console = console_with(client_for(&server));
    console.request().form().set_text("Hello world");
    let outcome = console.generate().await;

    mock.assert_async().await;
    assert_eq!(
        outcome,
        GenerateOutcome::Ready {
            url: "/audio/0123456789abcdef01234567.mp3".to_string()
        }
    );
    assert_eq!(console.request().form().status(), "Ready.");
    assert_eq!(
        console.request().form().transcript().as_deref(),
        Some("ہیلو دنیا")
    );
}

#[tokio::test]
async fn test_blank_text_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/tts")
        .expect(0)
        .create_async()
        .await;

    let console = console_with(client_for(&server));
    console.request().form().set_text("  ");
    let outcome = console.generate().await;

    mock.assert_async().await;
    assert_eq!(outcome, GenerateOutcome::Rejected);
}

#[tokio::test]
async fn test_error_body_message_is_shown() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/tts")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error": "Translation failed: upstream unavailable"}"#)
        .create_async()
        .await;

    let console = console_with(client_for(&server));
    console.request().form().set_text("hello");
    console.generate().await;

    let form = console.request().form();
    assert_eq!(form.status(), "Error: Translation failed: upstream unavailable");
    assert!(form.trigger_enabled());
    assert!(!console.player().view().panel_visible());
}

#[tokio::test]
async fn test_non_json_error_page() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/tts")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Bad Gateway</body></html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .synthesize(&SynthesisRequest::new("hello", "alloy", "mp3"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Remote { status: Some(502), .. }));
    assert_eq!(err.user_message(), "Request failed with HTTP 502");
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/tts")
        .with_status(200)
        .with_body("{\"ok\": tru")
        .create_async()
        .await;

    let console = console_with(client_for(&server));
    console.request().form().set_text("hello");
    let outcome = console.generate().await;

    match outcome {
        GenerateOutcome::Failed { message } => assert!(!message.is_empty()),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(console.request().form().status().starts_with("Error: "));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client = HttpSynthesisClient::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let console = console_with(client);
    console.request().form().set_text("hello");
    let outcome = console.generate().await;

    assert!(matches!(outcome, GenerateOutcome::Failed { .. }));
    assert!(console.request().form().trigger_enabled());
}
