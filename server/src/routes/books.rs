//! Book endpoint routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bookshelf_engine::BookPayload;

use crate::envelope::Envelope;
use crate::error::Result;
use crate::handlers::{
    handle_create, handle_delete, handle_get, handle_list, handle_update, BookDetail, BookList,
    CreatedBook, ListQuery,
};
use crate::AppState;

/// Create book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_handler).post(create_handler))
        .route(
            "/books/{book_id}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
}

/// POST /books - Add a book.
async fn create_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<CreatedBook>>)> {
    let Json(payload) = payload?;
    let created = handle_create(&state.store, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(created).with_message("Book added successfully")),
    ))
}

/// GET /books - List books, optionally filtered.
async fn list_handler(
    State(state): State<AppState>,
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Envelope<BookList>> {
    // An unreadable query string filters nothing.
    let query = match pairs {
        Ok(Query(pairs)) => ListQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!("Ignoring query string: {}", rejection.body_text());
            ListQuery::default()
        }
    };
    let list = handle_list(&state.store, &query).await;
    Json(Envelope::success(list))
}

/// GET /books/{book_id} - Fetch one book.
async fn get_handler(
    State(state): State<AppState>,
    book_id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<BookDetail>>> {
    let Path(book_id) = book_id?;
    let detail = handle_get(&state.store, &book_id).await?;
    Ok(Json(Envelope::success(detail)))
}

/// PUT /books/{book_id} - Replace a book's fields.
async fn update_handler(
    State(state): State<AppState>,
    book_id: std::result::Result<Path<String>, PathRejection>,
    payload: std::result::Result<Json<BookPayload>, JsonRejection>,
) -> Result<Json<Envelope<()>>> {
    let Path(book_id) = book_id?;
    let Json(payload) = payload?;
    handle_update(&state.store, &book_id, payload).await?;
    Ok(Json(Envelope::done("Book updated successfully")))
}

/// DELETE /books/{book_id} - Remove a book.
async fn delete_handler(
    State(state): State<AppState>,
    book_id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<()>>> {
    let Path(book_id) = book_id?;
    handle_delete(&state.store, &book_id).await?;
    Ok(Json(Envelope::done("Book deleted successfully")))
}
