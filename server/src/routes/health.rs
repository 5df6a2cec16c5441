//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Books currently held in memory
    pub books: usize,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// GET /health - Liveness plus the size of the store.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let books = state.store.read().await.len();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        books,
    })
}

/// GET / - Plain-text banner.
async fn root() -> &'static str {
    "Bookshelf Server"
}
