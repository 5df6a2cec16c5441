//! Bookshelf Server - HTTP front end for the in-memory book store.
//!
//! Exposes create, list, fetch, update and delete over `/books`, wrapping
//! every response in the `{status, message?, data?}` envelope.

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
mod routes;

use std::sync::Arc;

use axum::Router;
use bookshelf_engine::BookStore;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::SharedStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    /// Wrap a store for sharing across requests.
    pub fn new(store: BookStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Build the application router with tracing and permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
