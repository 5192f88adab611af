//! Output rendering for CLI commands.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Renders a note as one `Label: value` line per field.
///
/// Fields appear in record order: title, body, time added.
pub fn format_note(note: &Note) -> String {
    let fields = [
        ("title", note.title().to_string()),
        ("body", note.body().to_string()),
        ("time_added", format_timestamp(note.time_added())),
    ];

    fields
        .iter()
        .map(|(key, value)| format!("{}: {}", field_label(key), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display label for a note field key.
pub(crate) fn field_label(key: &str) -> String {
    match key {
        "time_added" => "Added on".to_string(),
        _ => {
            let mut chars = key.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

pub(crate) fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
