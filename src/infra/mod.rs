//! File-backed storage for the notebook

mod store;

pub use store::{NoteStore, StoreError};
