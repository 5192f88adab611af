//! The in-memory note collection and its title-keyed operations.

use crate::domain::Note;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from notebook operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotebookError {
    #[error("a note titled '{title}' already exists")]
    DuplicateTitle { title: String },

    #[error("note not found: '{title}'")]
    NotFound { title: String },
}

/// An ordered collection of notes keyed by case-insensitive title.
///
/// Insertion order is preserved and is the order notes are stored in.
/// Title uniqueness is checked on [`add`](Self::add) only; a notebook
/// loaded from disk is taken as-is, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notebook {
    notes: Vec<Note>,
}

impl Notebook {
    /// Creates an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the first note whose title matches, ignoring case.
    pub fn find(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.matches_title(title))
    }

    fn find_mut(&mut self, title: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.matches_title(title))
    }

    /// Appends a new note stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::DuplicateTitle` if a note with the same
    /// title (ignoring case) already exists.
    pub fn add(&mut self, title: &str, body: &str) -> Result<&Note, NotebookError> {
        self.add_at(title, body, Utc::now())
    }

    /// Appends a new note with an explicit creation time.
    pub fn add_at(
        &mut self,
        title: &str,
        body: &str,
        time_added: DateTime<Utc>,
    ) -> Result<&Note, NotebookError> {
        if self.find(title).is_some() {
            return Err(NotebookError::DuplicateTitle {
                title: title.to_string(),
            });
        }

        self.notes.push(Note::new(title, body, time_added));
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Removes every note whose title matches, ignoring case.
    ///
    /// Returns the removed notes in stored order. There is more than one only
    /// when the notebook already held case-insensitive duplicates.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::NotFound` if nothing matches.
    pub fn delete(&mut self, title: &str) -> Result<Vec<Note>, NotebookError> {
        let (removed, kept): (Vec<Note>, Vec<Note>) = std::mem::take(&mut self.notes)
            .into_iter()
            .partition(|n| n.matches_title(title));
        self.notes = kept;

        if removed.is_empty() {
            return Err(NotebookError::NotFound {
                title: title.to_string(),
            });
        }
        Ok(removed)
    }

    /// Replaces the body of the first matching note.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::NotFound` if nothing matches.
    pub fn update(&mut self, title: &str, body: &str) -> Result<&Note, NotebookError> {
        let note = self.find_mut(title).ok_or_else(|| NotebookError::NotFound {
            title: title.to_string(),
        })?;
        note.set_body(body);
        Ok(&*note)
    }

    /// Iterates notes in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Consumes the notebook, returning its notes.
    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }
}

impl From<Vec<Note>> for Notebook {
    fn from(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

impl<'a> IntoIterator for &'a Notebook {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
