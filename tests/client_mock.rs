//! HTTP-level integration tests against a mockito server.

use ondemand_chat::{
    ChatClient, ContextField, Error, QueryRequest, ResponseMode, Session,
};
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> ChatClient {
    ChatClient::builder()
        .api_key("test-key")
        .external_user_id("user-1")
        .base_url_override(server.url())
        .build()
        .expect("client should build")
}

fn session_with_context() -> Session {
    Session {
        id: "sess-1".to_string(),
        context_metadata: vec![ContextField::new("a", "1")],
    }
}

#[tokio::test]
async fn create_session_decodes_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/sessions")
        .match_header("apikey", "test-key")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": {
                    "id": "sess-1",
                    "contextMetadata": [{"key": "userId", "value": "1"}],
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let context = vec![ContextField::new("userId", "1")];
    let session = client.create_session(&[], &context).await.unwrap();

    assert_eq!(session.id, "sess-1");
    assert_eq!(session.context_metadata, context);
    mock.assert_async().await;
}

#[tokio::test]
async fn create_session_403_is_fatal_and_no_query_is_issued() {
    let mut server = mockito::Server::new_async().await;
    let session_mock = server
        .mock("POST", "/sessions")
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;
    let query_mock = server
        .mock("POST", mockito::Matcher::Regex(r"^/sessions/.+/query$".to_string()))
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.create_session(&[], &[]).await.unwrap_err();

    match err {
        Error::SessionCreation { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("expected SessionCreation, got {other:?}"),
    }
    session_mock.assert_async().await;
    query_mock.assert_async().await;
}

#[tokio::test]
async fn create_session_undecodable_body_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/sessions")
        .with_status(201)
        .with_body("{\"unexpected\": true}")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.create_session(&[], &[]).await.unwrap_err();

    assert!(matches!(err, Error::SessionCreation { status: 201, .. }));
}

#[tokio::test]
async fn sync_query_merges_context_metadata_into_data() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/sessions/sess-1/query")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": {"text": "hi"}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let request = QueryRequest::new("hello").response_mode(ResponseMode::Sync);
    let document = client
        .submit_query(&session_with_context(), &request)
        .await
        .unwrap();

    assert_eq!(
        document,
        json!({
            "data": {
                "text": "hi",
                "contextMetadata": [{"key": "a", "value": "1"}],
            }
        })
    );
}

#[tokio::test]
async fn stream_query_aggregates_into_envelope() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/sessions/sess-1/query")
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(concat!(
            "data: {\"eventType\":\"fulfillment\",\"answer\":\"Hel\",\"sessionId\":\"sess-1\",\"messageId\":\"msg-1\"}\n",
            "data: {\"eventType\":\"fulfillment\",\"answer\":\"lo\"}\n",
            "not a data line\n",
            "data: {\"eventType\":\"metricsLog\",\"publicMetrics\":{\"tokens\":5}}\n",
            "data: [DONE]\n",
        ))
        .create_async()
        .await;

    let client = client_for(&server);
    let request = QueryRequest::new("hello").response_mode(ResponseMode::Stream);
    let document = client
        .submit_query(&session_with_context(), &request)
        .await
        .unwrap();

    assert_eq!(
        document,
        json!({
            "message": "Chat query submitted successfully",
            "data": {
                "sessionId": "sess-1",
                "messageId": "msg-1",
                "answer": "Hello",
                "metrics": {"tokens": 5},
                "status": "completed",
                "contextMetadata": [{"key": "a", "value": "1"}],
            }
        })
    );
}

#[tokio::test]
async fn stream_query_without_done_sentinel_still_completes() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/sessions/sess-1/query")
        .with_status(200)
        .with_body("data: {\"eventType\":\"fulfillment\",\"answer\":\"partial\"}\n")
        .create_async()
        .await;

    let client = client_for(&server);
    let request = QueryRequest::new("hello").response_mode(ResponseMode::Stream);
    let document = client
        .submit_query(&session_with_context(), &request)
        .await
        .unwrap();

    assert_eq!(document["data"]["answer"], json!("partial"));
    assert_eq!(document["data"]["status"], json!("completed"));
}

#[tokio::test]
async fn non_success_query_status_fails_before_reading_stream() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/sessions/sess-1/query")
        .with_status(500)
        .with_body("backend exploded")
        .create_async()
        .await;

    let client = client_for(&server);
    let request = QueryRequest::new("hello").response_mode(ResponseMode::Stream);
    let err = client
        .submit_query(&session_with_context(), &request)
        .await
        .unwrap_err();

    match err {
        Error::QuerySubmission { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "backend exploded");
        }
        other => panic!("expected QuerySubmission, got {other:?}"),
    }
}

#[tokio::test]
async fn unsupported_response_mode_fails_without_network_call() {
    let mut server = mockito::Server::new_async().await;
    let query_mock = server
        .mock("POST", "/sessions/sess-1/query")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = QueryRequest::new("hello").response_mode_raw("batch");
    let err = client
        .submit_query(&session_with_context(), &request)
        .await
        .unwrap_err();

    match err {
        Error::UnsupportedResponseMode(mode) => assert_eq!(mode, "batch"),
        other => panic!("expected UnsupportedResponseMode, got {other:?}"),
    }
    query_mock.assert_async().await;
}

#[tokio::test]
async fn upload_media_returns_backend_record() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/media/v1/public/file/raw")
        .match_header("apikey", "test-key")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": {"id": "media-1"}}).to_string())
        .create_async()
        .await;

    let path = std::env::temp_dir().join("ondemand-chat-upload.txt");
    std::fs::write(&path, b"attachment contents").unwrap();

    let client = client_for(&server);
    let media = client
        .upload_media(&session_with_context(), &path, &["agent-1".to_string()])
        .await
        .unwrap();

    assert_eq!(media.id, "media-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_media_failure_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/media/v1/public/file/raw")
        .with_status(500)
        .with_body("storage unavailable")
        .create_async()
        .await;

    let path = std::env::temp_dir().join("ondemand-chat-upload-err.txt");
    std::fs::write(&path, b"attachment contents").unwrap();

    let client = client_for(&server);
    let err = client
        .upload_media(&session_with_context(), &path, &[])
        .await
        .unwrap_err();

    match err {
        Error::MediaUpload { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "storage unavailable");
        }
        other => panic!("expected MediaUpload, got {other:?}"),
    }
}

#[tokio::test]
async fn request_body_carries_nested_model_configs() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/sessions/sess-1/query")
        .match_body(mockito::Matcher::PartialJson(json!({
            "endpointId": "predefined-openai-gpt4.1",
            "query": "hello",
            "responseMode": "sync",
            "modelConfigs": {"temperature": 0.7, "topP": 1.0},
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let request = QueryRequest::new("hello").response_mode(ResponseMode::Sync);
    client
        .submit_query(&session_with_context(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
}
