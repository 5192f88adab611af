//! Isolated test environment with a temp note store.

#![allow(dead_code)]

use super::{NotekeepCommand, TestNote};
use notekeep::domain::{Note, Notebook};
use notekeep::infra::NoteStore;
use notekeep::service::NoteService;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a store file inside a temp directory.
///
/// The store file does not exist until a note is seeded or a command
/// writes it. Everything is removed when the TestEnv is dropped.
pub struct TestEnv {
    _temp_dir: TempDir,
    store_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store_path = temp_dir.path().join("notes.json");
        Self {
            _temp_dir: temp_dir,
            store_path,
        }
    }

    /// Creates an environment whose store sits in a directory that doesn't
    /// exist, so every save fails.
    pub fn unwritable() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store_path = temp_dir.path().join("missing").join("notes.json");
        Self {
            _temp_dir: temp_dir,
            store_path,
        }
    }

    /// Returns the path of the note store file.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn store(&self) -> NoteStore {
        NoteStore::new(&self.store_path)
    }

    pub fn service(&self) -> NoteService {
        NoteService::new(self.store())
    }

    /// Writes the given notes as the entire store.
    pub fn seed(&self, notes: &[TestNote]) {
        let notebook = Notebook::from(notes.iter().map(TestNote::to_note).collect::<Vec<_>>());
        self.store().save(&notebook).expect("Failed to seed store");
    }

    /// Writes raw bytes to the store file.
    pub fn write_raw(&self, content: &str) {
        std::fs::write(&self.store_path, content).expect("Failed to write store");
    }

    /// Loads the store, panicking if it can't be read.
    pub fn notes(&self) -> Vec<Note> {
        self.store()
            .load()
            .expect("Failed to load store")
            .into_notes()
    }

    /// Titles in stored order.
    pub fn titles(&self) -> Vec<String> {
        self.notes().iter().map(|n| n.title().to_string()).collect()
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> NotekeepCommand {
        NotekeepCommand::new().file(&self.store_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
