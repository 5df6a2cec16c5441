//! Unified error handling for the server.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookshelf_engine::Error as EngineError;
use std::fmt;

use crate::envelope::Envelope;

/// The book operation a request was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Fetch,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Fetch => "fetch",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {} book", self.verb())
    }
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{action}: {source}")]
    Book {
        action: Action,
        #[source]
        source: EngineError,
    },

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Wrap an engine error raised while performing `action`.
    pub fn book(action: Action, source: EngineError) -> Self {
        AppError::Book { action, source }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Book { source, .. } if source.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Book { source, .. } if source.is_validation() => StatusCode::BAD_REQUEST,
            AppError::Book { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message placed in the fail envelope.
    pub fn message(&self) -> String {
        match self {
            AppError::Book {
                action: Action::Fetch,
                source: EngineError::BookNotFound(_),
            } => "Book not found".to_string(),
            AppError::Book { action, source } => match source {
                EngineError::MissingName => format!("{}. Please provide the book name", action),
                EngineError::ReadPageExceedsPageCount { .. } => {
                    format!("{}. readPage must not exceed pageCount", action)
                }
                EngineError::BookNotFound(_) => format!("{}. Id not found", action),
                EngineError::IdsExhausted { .. } => {
                    format!("{}. Could not assign a unique id", action)
                }
            },
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Book { source, .. } if source.is_validation() => {
                tracing::debug!("Rejected payload: {}", self);
            }
            _ if status.is_server_error() => tracing::error!("Request failed: {}", self),
            _ => tracing::warn!("Request failed: {}", self),
        }

        (status, Json(Envelope::fail(self.message()))).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
