//! HTTP route definitions.

mod books;
mod health;

use crate::error::AppError;
use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(books::routes())
        .fallback(not_found)
}

/// Fallback for paths no route claims.
async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
