//! Integration tests for the single-shot collaborator service clients.

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aihub_client::config::KnowledgeConfig;
use aihub_client::services::image::ImageGenerationRequest;
use aihub_client::{
    AihubError, ImageClient, ImageConfig, KnowledgeClient, Nl2SqlClient, Nl2SqlConfig,
    SpeechClient, SpeechConfig,
};

#[tokio::test]
async fn image_generation_returns_urls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/image/create"))
        .and(body_json(serde_json::json!({
            "prompt": "a red fox",
            "width": 1024,
            "height": 1024
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 10000,
            "message": "success",
            "data": {
                "image_urls": ["http://cdn.example/fox.png"],
                "binary_data_base64": []
            },
            "request_id": "req-1"
        })))
        .mount(&server)
        .await;

    let client = ImageClient::new(ImageConfig::new(server.uri()));
    let response = client
        .generate(&ImageGenerationRequest::new("a red fox"))
        .await
        .expect("image");
    assert_eq!(response.first_url(), Some("http://cdn.example/fox.png"));
    assert_eq!(response.code, 10000);
}

#[tokio::test]
async fn image_generation_surfaces_service_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/image/create"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": {"code": 50000, "message": "upstream quota exceeded"}
        })))
        .mount(&server)
        .await;

    let client = ImageClient::new(ImageConfig::new(server.uri()));
    let err = client
        .generate(&ImageGenerationRequest::new("a red fox"))
        .await
        .expect_err("should fail");
    match err {
        AihubError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream quota exceeded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn speech_synthesis_returns_audio_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tts"))
        .and(body_json(serde_json::json!({ "text": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 10000,
            "message": "success",
            "data": "UklGRg=="
        })))
        .mount(&server)
        .await;

    let client = SpeechClient::new(SpeechConfig::new(server.uri()));
    let response = client.synthesize("hello").await.expect("audio");
    assert_eq!(response.data, "UklGRg==");
}

#[tokio::test]
async fn nl2sql_returns_generated_sql() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/nl2sql"))
        .and(body_json(serde_json::json!({ "query": "count all users" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "natural_language": "count all users",
            "sql_query": "SELECT COUNT(*) FROM users;",
            "database_schema": "users(id, username, email)"
        })))
        .mount(&server)
        .await;

    let client = Nl2SqlClient::new(Nl2SqlConfig::new(server.uri()));
    let response = client.convert("count all users").await.expect("sql");
    assert_eq!(response.sql_query, "SELECT COUNT(*) FROM users;");
}

#[tokio::test]
async fn nl2sql_error_object_is_an_upstream_error_even_on_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/nl2sql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "conversion failed, please retry later"
        })))
        .mount(&server)
        .await;

    let client = Nl2SqlClient::new(Nl2SqlConfig::new(server.uri()));
    let err = client.convert("count all users").await.expect_err("should fail");
    match err {
        AihubError::UpstreamError(message) => {
            assert_eq!(message, "conversion failed, please retry later");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // The friendly message keeps the upstream text verbatim.
}

#[tokio::test]
async fn undecodable_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/nl2sql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = Nl2SqlClient::new(Nl2SqlConfig::new(server.uri()));
    let err = client.convert("count all users").await.expect_err("should fail");
    assert!(matches!(err, AihubError::ParseError(_)));
}

#[tokio::test]
async fn knowledge_query_returns_answer_and_sources() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "The warranty lasts two years.",
            "sources": [
                {"content": "Warranty: 24 months from purchase.", "score": 0.812}
            ]
        })))
        .mount(&server)
        .await;

    let client = KnowledgeClient::new(KnowledgeConfig::new(server.uri()));
    let response = client
        .query("how long is the warranty?", &[])
        .await
        .expect("answer");
    assert_eq!(response.answer, "The warranty lasts two years.");
    assert_eq!(response.sources.len(), 1);
    assert!(response.sources[0].score > 0.8);
}

#[tokio::test]
async fn knowledge_upload_sends_multipart_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "File uploaded and processed successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = KnowledgeClient::new(KnowledgeConfig::new(server.uri()));
    client
        .upload("manual.txt", b"warranty lasts two years".to_vec())
        .await
        .expect("upload");
}

#[tokio::test]
async fn knowledge_upload_surfaces_unsupported_file_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "Unsupported file type"
        })))
        .mount(&server)
        .await;

    let client = KnowledgeClient::new(KnowledgeConfig::new(server.uri()));
    let err = client
        .upload("archive.zip", vec![0x50, 0x4b])
        .await
        .expect_err("should fail");
    match err {
        AihubError::ApiError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Unsupported file type");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn knowledge_status_reports_document_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/knowledge_base/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document_count": 42,
            "uploaded_files": ["manual.pdf"],
            "persist_directory": "knowledge_base"
        })))
        .mount(&server)
        .await;

    let client = KnowledgeClient::new(KnowledgeConfig::new(server.uri()));
    let status = client.status().await.expect("status");
    assert_eq!(status.document_count, 42);
    assert_eq!(status.uploaded_files, vec!["manual.pdf"]);
}

#[tokio::test]
async fn knowledge_clear_succeeds_on_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/knowledge_base/clear"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Knowledge base cleared successfully"
        })))
        .mount(&server)
        .await;

    let client = KnowledgeClient::new(KnowledgeConfig::new(server.uri()));
    client.clear().await.expect("clear");
}
