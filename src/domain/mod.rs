//! Core types: Note, Notebook, input validation

mod note;
mod notebook;
mod validation;

pub use note::Note;
pub use notebook::{Notebook, NotebookError};
pub use validation::{ValidationError, require_text};
