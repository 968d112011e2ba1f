//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every notewall operation, regardless of the transport
//! wrapping it.
//!
//! The facade dispatches to the command functions, stamps the current time
//! into the query pipeline, and carries the deploy configuration (page
//! size, upload ceiling). It holds no business logic, performs no output
//! formatting, and never touches stdout.
//!
//! ## Generic Over the Backends
//!
//! `NotewallApi<S, B>` is generic over the note store and blob store:
//!
//! - Production: `NotewallApi<FileStore, LocalBlobs>`
//! - Testing: `NotewallApi<InMemoryStore, MemBlobs>`
//!
//! This keeps transport-level tests off the filesystem entirely.

use chrono::Utc;

use crate::auth::Principal;
use crate::commands;
use crate::commands::download::Download;
use crate::commands::list::Listing;
use crate::config::NotewallConfig;
use crate::error::Result;
use crate::files::{BlobStore, Upload};
use crate::model::{CommentDraft, Note, NoteDelta, NoteDraft};
use crate::query::NoteQuery;
use crate::store::NoteStore;
use crate::summarize;

/// The main API facade for notewall operations.
pub struct NotewallApi<S: NoteStore, B: BlobStore> {
    store: S,
    blobs: B,
    page_size: usize,
    max_upload_bytes: usize,
}

impl<S: NoteStore, B: BlobStore> NotewallApi<S, B> {
    pub fn new(store: S, blobs: B, config: &NotewallConfig) -> Self {
        Self {
            store,
            blobs,
            page_size: config.page_size,
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    pub fn list(&self, query: &NoteQuery) -> Result<Listing> {
        commands::list::run(&self.store, query, Utc::now(), self.page_size)
    }

    pub fn create(
        &mut self,
        draft: NoteDraft,
        uploads: Vec<Upload>,
        owner: Option<String>,
    ) -> Result<Note> {
        commands::create::run(
            &mut self.store,
            &mut self.blobs,
            draft,
            uploads,
            owner,
            self.max_upload_bytes,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn edit(
        &mut self,
        id: u64,
        delta: NoteDelta,
        uploads: Vec<Upload>,
        remove_attachment_ids: &[u64],
        actor: Option<&Principal>,
    ) -> Result<Note> {
        commands::update::run(
            &mut self.store,
            &mut self.blobs,
            id,
            delta,
            uploads,
            remove_attachment_ids,
            actor,
            self.max_upload_bytes,
        )
    }

    pub fn delete(&mut self, id: u64, actor: Option<&Principal>) -> Result<()> {
        commands::delete::run(&mut self.store, &mut self.blobs, id, actor)
    }

    pub fn like(&mut self, id: u64) -> Result<u64> {
        commands::like::run(&mut self.store, id)
    }

    pub fn comment(&mut self, id: u64, draft: CommentDraft) -> Result<Note> {
        commands::comment::run(&mut self.store, id, draft)
    }

    pub fn download(&self, attachment_id: u64) -> Result<Download> {
        commands::download::run(&self.store, &self.blobs, attachment_id)
    }

    pub fn summarize(&self, text: &str) -> Result<String> {
        summarize::summarize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotewallError;
    use crate::files::memory::MemBlobs;
    use crate::store::memory::InMemoryStore;

    fn api() -> NotewallApi<InMemoryStore, MemBlobs> {
        NotewallApi::new(
            InMemoryStore::new(),
            MemBlobs::new(),
            &NotewallConfig::default(),
        )
    }

    fn draft(body: &str) -> NoteDraft {
        NoteDraft {
            author: "ana".into(),
            title: "T".into(),
            body: body.into(),
            class_code: "CS124".into(),
            tags: String::new(),
        }
    }

    #[test]
    fn test_create_then_list_roundtrip() {
        let mut api = api();
        let note = api.create(draft("hello world"), vec![], None).unwrap();
        assert_eq!(note.id, 1);

        let listing = api.list(&NoteQuery::default()).unwrap();
        assert_eq!(listing.total, 1);
        assert_eq!(listing.notes[0].id, 1);
    }

    #[test]
    fn test_like_and_comment_dispatch() {
        let mut api = api();
        let note = api.create(draft("body"), vec![], None).unwrap();
        assert_eq!(api.like(note.id).unwrap(), 1);
        let updated = api
            .comment(
                note.id,
                CommentDraft {
                    author: "ben".into(),
                    body: "nice".into(),
                },
            )
            .unwrap();
        assert_eq!(updated.comments.len(), 1);
    }

    #[test]
    fn test_delete_dispatch() {
        let mut api = api();
        let note = api.create(draft("gone soon"), vec![], None).unwrap();
        api.delete(note.id, None).unwrap();
        assert!(matches!(
            api.delete(note.id, None),
            Err(NotewallError::NoteNotFound(_))
        ));
    }

    #[test]
    fn test_summarize_dispatch() {
        let api = api();
        assert!(matches!(
            api.summarize("  "),
            Err(NotewallError::EmptyInput)
        ));
    }
}
