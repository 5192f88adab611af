//! Axum route handlers for the notes API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::NotebookError;
use crate::service::{NoteService, ServiceError};

pub struct AppState {
    pub service: NoteService,
    /// Held across each load-modify-save so that at most one mutation is
    /// in flight per store.
    write_lock: Mutex<()>,
}

impl AppState {
    pub fn new(service: NoteService) -> Self {
        Self {
            service,
            write_lock: Mutex::new(()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub body: String,
}

/// Plain-text error response.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Notebook(NotebookError::NotFound { .. }) => {
                ApiError::new(StatusCode::NOT_FOUND, err.to_string())
            }
            ServiceError::Notebook(NotebookError::DuplicateTitle { .. })
            | ServiceError::Validation(_) => ApiError::new(StatusCode::BAD_REQUEST, err.to_string()),
            ServiceError::Store(store_err) => {
                if store_err.is_write() {
                    log::error!("failed to persist notes: {}", store_err);
                } else {
                    log::error!("notes unavailable: {}", store_err);
                }
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

// GET /notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Response {
    match state.service.list() {
        Ok(notebook) => (StatusCode::OK, Json(notebook)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

// POST /notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    let _guard = state.write_lock.lock().await;
    match state.service.add(&req.title, &req.body) {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

// GET /notes/:title
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Response {
    match state.service.get(&title) {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

// PUT /notes/:title
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    let _guard = state.write_lock.lock().await;
    match state.service.update(&title, &req.body) {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        // An unknown target is a bad update request, not a missing resource.
        Err(ServiceError::Notebook(err @ NotebookError::NotFound { .. })) => {
            ApiError::new(StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

// DELETE /notes/:title
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Response {
    let _guard = state.write_lock.lock().await;
    match state.service.delete(&title) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
