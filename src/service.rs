//! Note use-cases shared by the CLI and the HTTP API.
//!
//! Every call loads the full notebook from the store, applies one
//! operation, and (for mutations) writes the full notebook back. Nothing is
//! cached between calls.

use crate::domain::{Note, Notebook, NotebookError, ValidationError, require_text};
use crate::infra::{NoteStore, StoreError};
use thiserror::Error;

/// Error from a note use-case.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Notebook(#[from] NotebookError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Load-apply-save facade over a [`NoteStore`].
#[derive(Debug, Clone)]
pub struct NoteService {
    store: NoteStore,
}

impl NoteService {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Returns every stored note in stored order.
    pub fn list(&self) -> Result<Notebook, ServiceError> {
        Ok(self.store.load()?)
    }

    /// Returns the note with the given title, ignoring case.
    pub fn get(&self, title: &str) -> Result<Note, ServiceError> {
        let notebook = self.store.load()?;
        notebook
            .find(title)
            .cloned()
            .ok_or_else(|| not_found(title))
    }

    /// Adds a note and persists it.
    ///
    /// The title is trimmed and must be non-empty; the body is stored as
    /// given. A missing store file counts as an empty notebook.
    pub fn add(&self, title: &str, body: &str) -> Result<Note, ServiceError> {
        let title = require_text("title", title)?;
        let mut notebook = self.store.load_or_default()?;
        let note = notebook.add(&title, body)?.clone();
        self.store.save(&notebook)?;

        log::info!("added note '{}'", note.title());
        Ok(note)
    }

    /// Replaces a note's body and persists the change.
    pub fn update(&self, title: &str, body: &str) -> Result<Note, ServiceError> {
        let mut notebook = self.store.load()?;
        let note = notebook.update(title, body)?.clone();
        self.store.save(&notebook)?;

        log::info!("updated note '{}'", note.title());
        Ok(note)
    }

    /// Deletes every note matching `title` and persists the change.
    ///
    /// Returns the removed notes in stored order.
    pub fn delete(&self, title: &str) -> Result<Vec<Note>, ServiceError> {
        let mut notebook = self.store.load()?;
        let removed = notebook.delete(title)?;
        self.store.save(&notebook)?;

        log::info!("deleted {} note(s) titled '{}'", removed.len(), title);
        Ok(removed)
    }
}

fn not_found(title: &str) -> ServiceError {
    NotebookError::NotFound {
        title: title.to_string(),
    }
    .into()
}
