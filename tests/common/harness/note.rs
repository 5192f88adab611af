//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Utc};
use notekeep::domain::Note;

/// Builder for creating test notes with sensible defaults.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    body: String,
    time_added: DateTime<Utc>,
}

impl TestNote {
    /// Creates a new test note with the given title, an empty body,
    /// and a fixed timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            time_added: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .expect("valid timestamp")
                .with_timezone(&Utc),
        }
    }

    /// Sets the body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the creation timestamp from an RFC 3339 string.
    #[allow(dead_code)]
    pub fn added(mut self, rfc3339: &str) -> Self {
        self.time_added = DateTime::parse_from_rfc3339(rfc3339)
            .expect("Invalid timestamp")
            .with_timezone(&Utc);
        self
    }

    /// Returns the configured timestamp.
    #[allow(dead_code)]
    pub fn time_added(&self) -> DateTime<Utc> {
        self.time_added
    }

    /// Converts to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::new(self.title.clone(), self.body.clone(), self.time_added)
    }
}
