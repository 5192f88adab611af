//! Flat-file persistence for the whole notebook.
//!
//! The store is a single JSON file whose root is an array of notes. Every
//! load reads the entire file and every save rewrites it.

use crate::domain::Notebook;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while loading or saving the note store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note store not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read note store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("note store {path} is not a valid note list: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write note store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// True if persisting the notebook failed.
    pub fn is_write(&self) -> bool {
        matches!(self, StoreError::Write { .. })
    }

    fn write(path: &Path, source: io::Error) -> Self {
        StoreError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Handle to the JSON file backing a notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the whole notebook from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the file doesn't exist,
    /// `StoreError::Read` if it can't be read, and `StoreError::Parse` if
    /// its content is not a JSON array of notes.
    pub fn load(&self) -> Result<Notebook, StoreError> {
        let bytes = std::fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound {
                path: self.path.clone(),
            },
            _ => StoreError::Read {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let notebook: Notebook =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        log::debug!(
            "loaded {} note(s) from {}",
            notebook.len(),
            self.path.display()
        );
        Ok(notebook)
    }

    /// Like [`load`](Self::load), but a missing file yields an empty notebook.
    ///
    /// Read and parse failures are still reported.
    pub fn load_or_default(&self) -> Result<Notebook, StoreError> {
        match self.load() {
            Err(StoreError::NotFound { .. }) => {
                log::debug!("{} does not exist yet, starting empty", self.path.display());
                Ok(Notebook::new())
            }
            other => other,
        }
    }

    /// Overwrites the backing file with the given notebook.
    ///
    /// The existing file is truncated and rewritten in place, so its
    /// permissions are kept and a symlinked store updates its target.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` on any I/O failure, including a missing
    /// parent directory.
    pub fn save(&self, notebook: &Notebook) -> Result<(), StoreError> {
        let mut content = serde_json::to_string_pretty(notebook)
            .map_err(|e| StoreError::write(&self.path, e.into()))?;
        content.push('\n');

        std::fs::write(&self.path, content).map_err(|e| StoreError::write(&self.path, e))?;

        log::debug!(
            "saved {} note(s) to {}",
            notebook.len(),
            self.path.display()
        );
        Ok(())
    }
}
