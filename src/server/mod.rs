//! HTTP API over the note store.
//!
//! Routes:
//! - `GET    /notes`         list all notes
//! - `POST   /notes`         create a note from `{title, body}`
//! - `GET    /notes/:title`  fetch one note
//! - `PUT    /notes/:title`  replace a note's body from `{body}`
//! - `DELETE /notes/:title`  delete a note

mod routes;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

use crate::service::NoteService;

pub use routes::{AppState, CreateNoteRequest, UpdateNoteRequest};

/// Builds the route table for the given service.
pub fn router(service: NoteService) -> Router {
    let state = Arc::new(AppState::new(service));

    Router::new()
        .route("/notes", get(routes::list_notes).post(routes::create_note))
        .route(
            "/notes/:title",
            get(routes::get_note)
                .put(routes::update_note)
                .delete(routes::delete_note),
        )
        .with_state(state)
}

/// Binds `addr` and serves the API until the process is stopped.
pub async fn serve(service: NoteService, addr: &str) -> Result<()> {
    log::info!("using note store at {}", service.store().path().display());
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    log::info!("notekeep API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .with_context(|| "server error")?;
    Ok(())
}
