//! Input validation for user-supplied note fields.

use thiserror::Error;

/// Error returned when a required input field is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// Trims `input` and rejects it if nothing is left.
///
/// `field` names the input in the error message (e.g. "title").
pub fn require_text(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}
