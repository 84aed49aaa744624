use blogsum::ai::{AiError, GeminiClient, GenerativeSummarizer, Summarizer, TextGenerator};
use serde_json::json;
use std::{sync::Arc, time::Duration};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const MODEL: &str = "gemini-2.0-flash";
const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        Some("test-key".to_string()),
        &server.uri(),
        MODEL,
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_generate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Say hi" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hi!" }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = client(&mock_server).generate("Say hi").await.unwrap();
    assert_eq!(text, "Hi!");
}

#[tokio::test]
async fn test_upstream_503_keeps_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {
                "code": 503,
                "message": "The model is overloaded. Please try again later.",
                "status": "UNAVAILABLE"
            }
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).generate("text").await.unwrap_err();
    assert_eq!(
        err,
        AiError::Upstream {
            status: 503,
            message: "The model is overloaded. Please try again later.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_upstream_error_without_json_uses_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    match client(&mock_server).generate("text").await {
        Err(AiError::Upstream { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("Expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_without_candidates_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).generate("text").await.unwrap_err();
    assert!(matches!(err, AiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_summarizer_sends_templated_prompt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_json(json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": "Summarize the following text:\n\nA long post." }]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Short." }] } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let summarizer = GenerativeSummarizer::new(Arc::new(client(&mock_server)));
    assert_eq!(summarizer.summarize("A long post.").await.unwrap(), "Short.");
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "candidates": [{ "content": { "parts": [{ "text": "Too late." }] } }]
                }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = GeminiClient::new(
        Some("test-key".to_string()),
        &mock_server.uri(),
        MODEL,
        Duration::from_millis(200),
    )
    .unwrap();

    let err = client.generate("text").await.unwrap_err();
    assert_eq!(err, AiError::Timeout);
}
