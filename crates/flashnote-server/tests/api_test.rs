//! End-to-end tests for the REST API with a stub completion provider.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use flashnote_core::config::FlashnoteConfig;
use flashnote_core::error::{FlashnoteError, FlashnoteResult};
use flashnote_core::traits::{Completion, CompletionProvider, GenerationOptions};
use flashnote_server::{create_server, AppState};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

/// What the stub provider answers with.
#[derive(Clone)]
enum Reply {
    Text(&'static str),
    NoCandidates,
    Down,
}

/// Provider returning a fixed reply and recording the prompts it receives.
struct StubProvider {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(
        &self,
        prompt: &str,
        _options: Option<GenerationOptions>,
    ) -> FlashnoteResult<Completion> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.reply {
            Reply::Text(text) => Ok(Completion::new(vec![text.to_string()])),
            Reply::NoCandidates => Ok(Completion::default()),
            Reply::Down => Err(FlashnoteError::provider("connection reset by peer")),
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

fn app_with(provider: Arc<StubProvider>) -> Router {
    create_server(AppState::new(provider, &FlashnoteConfig::default()))
}

fn app() -> Router {
    app_with(StubProvider::new(Reply::Text("Q: q1\nA: a1\n")))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn save(app: &Router, content: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/save-note",
        Some(json!({ "content": content })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_save_note() {
    let app = app();
    let body = save(&app, "  The Krebs cycle  ").await;

    assert_eq!(body["message"], "Note saved successfully!");
    assert_eq!(body["note"], json!({"id": 1, "content": "The Krebs cycle"}));
}

#[tokio::test]
async fn test_save_empty_note_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/save-note", Some(json!({"content": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot save an empty note.");

    let (status, _) = send(&app, Method::POST, "/api/save-note", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_notes_in_insertion_order() {
    let app = app();
    let (_, body) = send(&app, Method::GET, "/api/notes", None).await;
    assert_eq!(body, json!({"notes": []}));

    save(&app, "first").await;
    save(&app, "second").await;

    let (status, body) = send(&app, Method::GET, "/api/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["notes"],
        json!([{"id": 1, "content": "first"}, {"id": 2, "content": "second"}])
    );
}

#[tokio::test]
async fn test_delete_note() {
    let app = app();
    save(&app, "first").await;
    save(&app, "second").await;

    let (status, body) = send(&app, Method::DELETE, "/api/notes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Note deleted successfully.");

    let (status, body) = send(&app, Method::DELETE, "/api/notes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Note not found.");

    let (_, body) = send(&app, Method::GET, "/api/notes", None).await;
    assert_eq!(body["notes"], json!([{"id": 2, "content": "second"}]));

    // Ids keep counting after a delete.
    let body = save(&app, "third").await;
    assert_eq!(body["note"]["id"], 3);
}

#[tokio::test]
async fn test_update_note() {
    let app = app();
    save(&app, "first").await;
    save(&app, "second").await;

    let (status, body) = send(&app, Method::PUT, "/api/notes/1", Some(json!({"content": " edited "}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Note updated successfully.");
    assert_eq!(body["note"], json!({"id": 1, "content": "edited"}));

    let (_, body) = send(&app, Method::GET, "/api/notes", None).await;
    assert_eq!(
        body["notes"],
        json!([{"id": 1, "content": "edited"}, {"id": 2, "content": "second"}])
    );
}

#[tokio::test]
async fn test_update_errors() {
    let app = app();
    save(&app, "original").await;

    let (status, body) = send(&app, Method::PUT, "/api/notes/1", Some(json!({"content": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot update to an empty note.");

    let (status, _) = send(&app, Method::PUT, "/api/notes/99", Some(json!({"content": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/notes", None).await;
    assert_eq!(body["notes"][0]["content"], "original");
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/api/notes/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Note not found.");
}

#[tokio::test]
async fn test_malformed_json_uses_error_shape() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/save-note")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "INVALID_BODY");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_generate_flashcards() {
    let provider = StubProvider::new(Reply::Text(
        "Sure! Here are your flashcards:\nQ: What is ATP?\nA: The cell's energy currency.\n\nQ: Where is it made?\nA: Mitochondria\nQ: dangling",
    ));
    let app = app_with(provider.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/generate-flashcards",
        Some(json!({"content": "ATP is made in mitochondria."})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"flashcards": [
            {"question": "What is ATP?", "answer": "The cell's energy currency."},
            {"question": "Where is it made?", "answer": "Mitochondria"}
        ]})
    );

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("generate exactly 5 clear and concise flashcards"));
    assert!(prompts[0].ends_with("Notes:\nATP is made in mitochondria."));
}

#[tokio::test]
async fn test_generate_with_unstructured_reply_is_empty() {
    let app = app_with(StubProvider::new(Reply::Text("I'd rather not.")));
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/generate-flashcards",
        Some(json!({"content": "anything"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"flashcards": []}));
}

#[tokio::test]
async fn test_generate_provider_down_is_500() {
    let app = app_with(StubProvider::new(Reply::Down));
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/generate-flashcards",
        Some(json!({"content": "anything"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("connection reset by peer"));
    assert_eq!(body["code"], "LLM_002");
}

#[tokio::test]
async fn test_generate_no_candidates_is_500() {
    let app = app_with(StubProvider::new(Reply::NoCandidates));
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/generate-flashcards",
        Some(json!({"content": "anything"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "No response from the completion provider.");
    assert_eq!(body["code"], "LLM_005");
}

#[tokio::test]
async fn test_generate_from_stored_note() {
    let provider = StubProvider::new(Reply::Text("Q: q1\nA: a1\n"));
    let app = app_with(provider.clone());
    save(&app, "Stored note text").await;

    let (status, body) = send(&app, Method::POST, "/api/notes/1/flashcards", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["flashcards"], json!([{"question": "q1", "answer": "a1"}]));
    assert!(provider.prompts()[0].ends_with("Notes:\nStored note text"));

    let (status, _) = send(&app, Method::POST, "/api/notes/2/flashcards", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(provider.prompts().len(), 1);
}

#[tokio::test]
async fn test_health() {
    let app = app();
    save(&app, "one").await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["notes"], 1);
    assert_eq!(body["provider"], "stub");
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/notes")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "PUT")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
