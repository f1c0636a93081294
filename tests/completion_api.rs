use caption_studio::caption::{
    compose, CaptionError, CaptionGenerator, CaptionRequest, CompletionClient, CompletionError,
    Credential, GenerationOptions, Length, OpenAiClient,
};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn chat_reply(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

fn credential() -> Credential {
    Credential::new("sk-test").unwrap()
}

#[tokio::test]
async fn sends_fixed_model_and_bearer_credential() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": "gpt-4o", "max_tokens": 500 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("  1. Hi #coffee  ")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(server.uri());
    let prompt = compose("coffee", &["funny".to_string()], Length::Short);
    let text = client.complete(&prompt, &credential()).await.unwrap();

    assert_eq!(text, "1. Hi #coffee");
}

#[tokio::test]
async fn error_status_carries_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(server.uri());
    let prompt = compose("coffee", &["funny".to_string()], Length::Short);
    let err = client.complete(&prompt, &credential()).await.unwrap_err();

    match err {
        CompletionError::Status { status, message } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn blank_content_is_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("   ")))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(server.uri());
    let prompt = compose("coffee", &["funny".to_string()], Length::Short);
    let err = client.complete(&prompt, &credential()).await.unwrap_err();

    assert!(matches!(err, CompletionError::EmptyResponse));
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(server.uri());
    let prompt = compose("coffee", &["funny".to_string()], Length::Short);
    let err = client.complete(&prompt, &credential()).await.unwrap_err();

    assert!(matches!(err, CompletionError::Parse(_)));
}

#[tokio::test]
async fn generator_normalizes_live_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(
            "**Funny & Romantic Tone:**\n\n1. Latte love 😂❤️ #coffee\n2. Espresso yourself #coffee\n3. Brew crew ☕ #coffee",
        )))
        .mount(&server)
        .await;

    let generator = CaptionGenerator::new(Box::new(OpenAiClient::new(server.uri())));
    let request =
        CaptionRequest::from_form("coffee", "funny, romantic", Some("short"), Some(credential()))
            .unwrap();
    let result = generator
        .generate(&request, &GenerationOptions::live())
        .await
        .unwrap();

    assert_eq!(
        result.to_text(),
        "Latte love 😂❤️ #coffee\nEspresso yourself #coffee\nBrew crew ☕ #coffee"
    );
}

#[tokio::test]
async fn generator_classifies_quota_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "You exceeded your current quota", "type": "insufficient_quota" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = CaptionGenerator::new(Box::new(OpenAiClient::new(server.uri())));
    let request =
        CaptionRequest::from_form("coffee", "chill", None, Some(credential())).unwrap();
    let err = generator
        .generate(&request, &GenerationOptions::live())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CaptionError::QuotaExceeded("You exceeded your current quota".into())
    );
}

#[tokio::test]
async fn missing_credential_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("1. x")))
        .expect(0)
        .mount(&server)
        .await;

    let generator = CaptionGenerator::new(Box::new(OpenAiClient::new(server.uri())));
    let request = CaptionRequest::from_form("coffee", "chill", None, None).unwrap();
    let err = generator
        .generate(&request, &GenerationOptions::live())
        .await
        .unwrap_err();

    assert_eq!(err, CaptionError::MissingCredential);
}
