//! Read-only browse API over the generated fixture.
//!
//! The fixture document is loaded once at startup and served as-is:
//! section names at the root, section contents one level down. Nothing is
//! ever written back.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Shared fixture document.
#[derive(Clone)]
struct ApiState {
    data: Arc<Value>,
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// Load the fixture document from disk. Fails fast when the file is
/// missing or malformed.
pub fn load_fixture<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse fixture: {}", path.display()))
}

/// Build the browse router over a fixture document.
pub fn build_router(data: Value) -> Router {
    let state = ApiState {
        data: Arc::new(data),
    };
    Router::new()
        .route("/", get(list_sections))
        .route("/health", get(health_check))
        .route("/{category}", get(get_category))
        .route("/{category}/{sub}", get(get_subcategory))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the fixture browse API until the process is stopped.
pub async fn serve(fixture_path: &Path, port: u16) -> Result<()> {
    let data = load_fixture(fixture_path)?;
    let app = build_router(data);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Fixture API listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("API server terminated")?;
    Ok(())
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List all top-level section names.
async fn list_sections(State(state): State<ApiState>) -> Json<Vec<String>> {
    let keys = state
        .data
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    Json(keys)
}

/// A nested section lists its keys; a flat section returns its rows.
async fn get_category(
    State(state): State<ApiState>,
    UrlPath(category): UrlPath<String>,
) -> impl IntoResponse {
    match state.data.get(&category) {
        Some(Value::Object(section)) => {
            let keys: Vec<String> = section.keys().cloned().collect();
            Json(Value::from(keys)).into_response()
        }
        Some(value) => Json(value.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Rows of a nested section, e.g. `/salesforce/customers`.
async fn get_subcategory(
    State(state): State<ApiState>,
    UrlPath((category, sub)): UrlPath<(String, String)>,
) -> impl IntoResponse {
    match state.data.get(&category).and_then(|c| c.get(&sub)) {
        Some(value) => Json(value.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
