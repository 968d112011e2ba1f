//! # Storage Layer
//!
//! The [`NoteStore`] trait abstracts note persistence so the command layer
//! never knows which backing is in play. Two implementations ship:
//!
//! - [`fs::FileStore`]: production store, a single `notes.json` map written
//!   through on every mutation. Each mutation is one load-modify-write
//!   cycle, so a crash never leaves a half-applied change on disk.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Identity Assignment
//!
//! The store owns id assignment: [`NoteStore::insert`] hands out
//! `max existing id + 1` (1 for an empty collection) and returns the stored
//! note. A draft's placeholder id is ignored. Ids are never reused within a
//! store's lifetime as long as the highest-numbered note remains; deleting
//! the tail note releases its id, matching the reference behavior.
//!
//! ## Ordering
//!
//! [`NoteStore::list`] returns notes in ascending id order. Callers needing
//! a different order run the query engine's sorter over the result.

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;

/// Abstract interface for note persistence.
pub trait NoteStore {
    /// Insert a note, assigning its id. Returns the stored note.
    fn insert(&mut self, note: Note) -> Result<Note>;

    /// Fetch a note by id.
    fn get(&self, id: u64) -> Result<Note>;

    /// All notes, ascending by id.
    fn list(&self) -> Result<Vec<Note>>;

    /// Overwrite an existing note in place.
    fn update(&mut self, note: &Note) -> Result<()>;

    /// Remove a note permanently.
    fn remove(&mut self, id: u64) -> Result<()>;
}

/// Next attachment id across the whole collection: attachments share one
/// monotonic sequence so a download request can resolve an id without
/// knowing the parent note.
pub fn next_attachment_id<S: NoteStore>(store: &S) -> Result<u64> {
    let max = store
        .list()?
        .iter()
        .flat_map(|n| n.attachments.iter())
        .map(|a| a.id)
        .max()
        .unwrap_or(0);
    Ok(max + 1)
}
