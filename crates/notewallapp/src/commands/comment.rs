use crate::error::{NotewallError, Result};
use crate::model::{Comment, CommentDraft, Note};
use crate::store::NoteStore;

/// Appends a comment to a note. Comments are append-only; insertion order
/// is chronological order.
pub fn run<S: NoteStore>(store: &mut S, id: u64, draft: CommentDraft) -> Result<Note> {
    if draft.body.trim().is_empty() {
        return Err(NotewallError::Validation("comment body is required".into()));
    }
    let mut note = store.get(id)?;
    note.comments.push(Comment::new(&draft.author, &draft.body));
    store.update(&note)?;
    Ok(note)
}
