//! Note record: a titled body of text stamped with its creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single note.
///
/// The title is the note's key within a [`Notebook`](crate::domain::Notebook)
/// and is compared case-insensitively. Only the body changes after creation;
/// `title` and `time_added` are fixed when the note is made.
///
/// Field order here is also the serialized field order.
///
/// # Examples
///
/// ```
/// use notekeep::domain::Note;
/// use chrono::Utc;
///
/// let note = Note::new("Groceries", "Milk, eggs", Utc::now());
/// assert!(note.matches_title("GROCERIES"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    body: String,
    time_added: DateTime<Utc>,
}

impl Note {
    /// Creates a note. Validation of the inputs is the caller's job.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        time_added: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            time_added,
        }
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns when the note was added.
    pub fn time_added(&self) -> DateTime<Utc> {
        self.time_added
    }

    /// Returns true if `title` names this note, ignoring case.
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub(crate) fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
