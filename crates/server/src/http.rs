//! HTTP Endpoints
//!
//! REST API for the location context and chat assistant.

use axum::{
    extract::{Json, Path, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use vita_path_assistant::{QUICK_ACTIONS, RULES};
use vita_path_core::{ChatMessage, Coordinate};
use vita_path_location::LocationContext;

use crate::metrics::metrics_handler;
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.config.read();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    drop(config); // Release lock before building router

    Router::new()
        // Location context
        .route("/api/location", get(get_location))
        .route("/api/location/refresh", post(refresh_location))
        // Chat sessions
        .route("/api/sessions", post(create_session))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:id", get(get_session))
        .route("/api/sessions/:id", delete(delete_session))
        .route("/api/chat/:session_id", post(chat))
        .route("/api/chat/quick-actions", get(quick_actions))
        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Prometheus metrics
        .route("/metrics", get(metrics_handler))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000 for safety
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any);
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(true)
}

/// Current location context snapshot
async fn get_location(State(state): State<AppState>) -> Json<LocationContext> {
    Json(state.location.current())
}

/// Refresh request with an optional client-supplied fix
#[derive(Debug, Deserialize)]
struct RefreshRequest {
    latitude: f64,
    longitude: f64,
}

/// Re-run location resolution.
///
/// With a body, the client's coordinate is resolved directly (the browser
/// owns the device fix); without one, the configured source is queried.
/// Either way the response is the context after this resolution, which may
/// be a newer one's result if a later refresh overtook this call.
async fn refresh_location(
    State(state): State<AppState>,
    body: Option<Json<RefreshRequest>>,
) -> Json<LocationContext> {
    let context = match body {
        Some(Json(req)) => {
            state
                .location
                .refresh_at(Coordinate::new(req.latitude, req.longitude))
                .await
        }
        None => state.location.refresh().await,
    };
    Json(context)
}

/// Session creation response
#[derive(Debug, Serialize)]
struct SessionCreated {
    session_id: String,
    messages: Vec<ChatMessage>,
}

/// Create a chat session seeded with the assistant greeting
async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionCreated>), StatusCode> {
    let session = state
        .sessions
        .create(state.new_conversation())
        .map_err(StatusCode::from)?;

    Ok((
        StatusCode::CREATED,
        Json(SessionCreated {
            session_id: session.id.clone(),
            messages: session.conversation.transcript(),
        }),
    ))
}

/// List sessions
async fn list_sessions(State(state): State<AppState>) -> Json<serde_json::Value> {
    let sessions = state.sessions.list();
    Json(serde_json::json!({
        "sessions": sessions,
        "count": sessions.len(),
    }))
}

/// Get session info and transcript
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let session = state.sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(serde_json::json!({
        "session_id": session.id,
        "message_count": session.conversation.len(),
        "messages": session.conversation.transcript(),
    })))
}

/// Delete session
async fn delete_session(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if state.sessions.remove(&id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Chat request
#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

/// Chat response
#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
    category: String,
    language: String,
    turn_count: usize,
}

/// Chat endpoint: one user submission, one bot reply
async fn chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    if request.message.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let session = state
        .sessions
        .get(&session_id)
        .ok_or(StatusCode::NOT_FOUND)?;

    session.touch();

    let reply = session.conversation.submit(request.message).await;
    Ok(Json(ChatResponse {
        response: reply.text,
        category: reply
            .category
            .map(|c| c.as_str().to_string())
            .unwrap_or_default(),
        language: reply
            .language
            .map(|l| l.code().to_string())
            .unwrap_or_default(),
        turn_count: session.conversation.len(),
    }))
}

/// Canned shortcut prompts for the chat input
async fn quick_actions() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "actions": &QUICK_ACTIONS }))
}

/// Health check: verifies the rule table and reports resolver state
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let context = state.location.current();
    let mut checks = serde_json::Map::new();

    checks.insert(
        "classifier".to_string(),
        serde_json::json!({
            "status": if RULES.is_empty() { "degraded" } else { "ok" },
            "rules": RULES.len(),
        }),
    );

    checks.insert(
        "location".to_string(),
        serde_json::json!({
            // Failed is a recovered state: fallback data is being served
            "status": "ok",
            "resolution": context.status,
        }),
    );

    checks.insert(
        "sessions".to_string(),
        serde_json::json!({
            "status": "ok",
            "count": state.sessions.count(),
        }),
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "checks": checks,
        })),
    )
}

/// Readiness check with geocoding provider connectivity
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    // Extract config values before any await - parking_lot guards aren't Send
    let geocoder_url = {
        let config = state.get_config();
        config.location.geocoder_base_url.clone()
    };

    let mut checks = serde_json::Map::new();
    let mut ready = true;

    let geocoder_status = match tokio::time::timeout(
        std::time::Duration::from_secs(2),
        reqwest::get(&geocoder_url),
    )
    .await
    {
        Ok(Ok(resp)) if resp.status().is_success() => "ok",
        Ok(Ok(_)) => {
            ready = false;
            "error"
        }
        Ok(Err(_)) => {
            ready = false;
            "unreachable"
        }
        Err(_) => {
            ready = false;
            "timeout"
        }
    };

    checks.insert(
        "geocoder".to_string(),
        serde_json::json!({
            "status": geocoder_status,
            "url": geocoder_url,
        }),
    );

    let status = if ready { "ready" } else { "not_ready" };
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": status,
            "checks": checks,
        })),
    )
}
