use std::collections::BTreeMap;

use super::NoteStore;
use crate::error::{NotewallError, Result};
use crate::model::Note;

/// Map-backed store for tests and single-process deployments without
/// persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: BTreeMap<u64, Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for InMemoryStore {
    fn insert(&mut self, mut note: Note) -> Result<Note> {
        let id = self.notes.keys().next_back().copied().unwrap_or(0) + 1;
        note.id = id;
        for attachment in &mut note.attachments {
            attachment.note_id = id;
        }
        self.notes.insert(id, note.clone());
        Ok(note)
    }

    fn get(&self, id: u64) -> Result<Note> {
        self.notes
            .get(&id)
            .cloned()
            .ok_or(NotewallError::NoteNotFound(id))
    }

    fn list(&self) -> Result<Vec<Note>> {
        Ok(self.notes.values().cloned().collect())
    }

    fn update(&mut self, note: &Note) -> Result<()> {
        if !self.notes.contains_key(&note.id) {
            return Err(NotewallError::NoteNotFound(note.id));
        }
        self.notes.insert(note.id, note.clone());
        Ok(())
    }

    fn remove(&mut self, id: u64) -> Result<()> {
        self.notes
            .remove(&id)
            .map(|_| ())
            .ok_or(NotewallError::NoteNotFound(id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Comment, NoteDraft};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = NoteDraft {
                    author: format!("author{}", i + 1),
                    title: format!("Test Note {}", i + 1),
                    body: format!("Body for note {}", i + 1),
                    class_code: "CS124".into(),
                    ..Default::default()
                };
                self.store.insert(Note::from_draft(&draft, None)).unwrap();
            }
            self
        }

        pub fn with_note(mut self, author: &str, title: &str, body: &str, class: &str) -> Self {
            let draft = NoteDraft {
                author: author.into(),
                title: title.into(),
                body: body.into(),
                class_code: class.into(),
                ..Default::default()
            };
            self.store.insert(Note::from_draft(&draft, None)).unwrap();
            self
        }

        pub fn with_owned_note(mut self, owner: &str, title: &str) -> Self {
            let draft = NoteDraft {
                author: owner.into(),
                title: title.into(),
                body: "Owned body".into(),
                class_code: "CS124".into(),
                ..Default::default()
            };
            self.store
                .insert(Note::from_draft(&draft, Some(owner.into())))
                .unwrap();
            self
        }

        pub fn with_popular_note(mut self, title: &str, likes: u64, comments: usize) -> Self {
            let draft = NoteDraft {
                title: title.into(),
                body: "Popular body".into(),
                ..Default::default()
            };
            let mut note = Note::from_draft(&draft, None);
            note.likes = likes;
            for i in 0..comments {
                note.comments.push(Comment::new("fan", &format!("reply {}", i)));
            }
            self.store.insert(note).unwrap();
            self
        }
    }
}
