//! HTTP API tests
//!
//! Exercises the router in-process with `tower::ServiceExt::oneshot`.
//! Endpoints that would reach the external geocoding provider are not
//! driven here; the resolver's behavior is covered by the location crate's
//! integration tests with scripted fakes.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use vita_path_config::Settings;
use vita_path_server::{create_router, AppState};

fn test_router() -> Router {
    let mut settings = Settings::default();
    // The reply delay is cosmetic; keep tests instant
    settings.chat.response_delay_ms = 0;
    create_router(AppState::new(settings))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let router = test_router();
    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["classifier"]["status"], "ok");
}

#[tokio::test]
async fn location_context_starts_idle() {
    let router = test_router();
    let response = router.oneshot(get("/api/location")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "idle");
    assert!(json["place"].is_null());
}

#[tokio::test]
async fn chat_with_unknown_session_is_404() {
    let router = test_router();
    let response = router
        .oneshot(json_post(
            "/api/chat/no-such-session",
            serde_json::json!({ "message": "hello" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let router = test_router();

    let created = router
        .clone()
        .oneshot(json_post("/api/sessions", serde_json::json!({})))
        .await
        .unwrap();
    let session_id = body_json(created).await["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = router
        .oneshot(json_post(
            &format!("/api/chat/{session_id}"),
            serde_json::json!({ "message": "   " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn full_chat_flow_keeps_transcript_order() {
    let router = test_router();

    // Create a session; the transcript starts with the greeting
    let response = router
        .clone()
        .oneshot(json_post("/api/sessions", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let session_id = created["session_id"].as_str().unwrap().to_string();
    assert_eq!(created["messages"].as_array().unwrap().len(), 1);

    // English food question
    let response = router
        .clone()
        .oneshot(json_post(
            &format!("/api/chat/{session_id}"),
            serde_json::json!({ "message": "I want a healthy meal" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let reply = body_json(response).await;
    assert_eq!(reply["category"], "food");
    assert_eq!(reply["language"], "en");
    assert_eq!(reply["turn_count"], 3);

    // Hindi ayurveda question gets the Hindi response body
    let response = router
        .clone()
        .oneshot(json_post(
            &format!("/api/chat/{session_id}"),
            serde_json::json!({ "message": "मुझे आयुर्वेदिक उपाय चाहिए" }),
        ))
        .await
        .unwrap();
    let reply = body_json(response).await;
    assert_eq!(reply["category"], "ayurveda");
    assert_eq!(reply["language"], "hi");

    // Transcript alternates greeting, user, bot, user, bot
    let response = router
        .oneshot(get(&format!("/api/sessions/{session_id}")))
        .await
        .unwrap();
    let session = body_json(response).await;
    let messages = session["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 5);
    let authors: Vec<&str> = messages
        .iter()
        .map(|m| m["author"].as_str().unwrap())
        .collect();
    assert_eq!(authors, vec!["bot", "user", "bot", "user", "bot"]);
}

#[tokio::test]
async fn sessions_can_be_deleted() {
    let router = test_router();

    let created = router
        .clone()
        .oneshot(json_post("/api/sessions", serde_json::json!({})))
        .await
        .unwrap();
    let session_id = body_json(created).await["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/sessions/{session_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(get(&format!("/api/sessions/{session_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quick_actions_are_served() {
    let router = test_router();
    let response = router
        .oneshot(get("/api/chat/quick-actions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let actions = json["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 5);
    assert_eq!(actions[0]["category"], "food");
}
