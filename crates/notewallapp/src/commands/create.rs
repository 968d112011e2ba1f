use chrono::Utc;

use crate::error::{NotewallError, Result};
use crate::files::{self, BlobStore, Upload};
use crate::model::{Attachment, Note, NoteDraft};
use crate::store::{next_attachment_id, NoteStore};
use crate::tags;

/// Creates a note from a draft, extracting tags and hashtags, then stores
/// any attachments.
///
/// Every upload candidate is validated before the note is inserted, so a
/// rejected file leaves no state behind. The note is inserted first
/// because attachment records reference its assigned id.
pub fn run<S: NoteStore, B: BlobStore>(
    store: &mut S,
    blobs: &mut B,
    draft: NoteDraft,
    uploads: Vec<Upload>,
    owner: Option<String>,
    max_upload_bytes: usize,
) -> Result<Note> {
    if draft.body.trim().is_empty() {
        return Err(NotewallError::Validation("note body is required".into()));
    }
    for upload in &uploads {
        files::validate_upload(upload, max_upload_bytes)?;
    }

    let mut note = Note::from_draft(&draft, owner);
    let extracted = tags::extract(&note.body, &draft.tags);
    note.tags = extracted.tags;
    note.hashtags = extracted.hashtags;

    let mut note = store.insert(note)?;
    if !uploads.is_empty() {
        attach_uploads(store, blobs, &mut note, uploads)?;
        store.update(&note)?;
    }
    Ok(note)
}

/// Stores validated uploads and appends their records to `note`. Shared
/// with the edit path.
pub(crate) fn attach_uploads<S: NoteStore, B: BlobStore>(
    store: &S,
    blobs: &mut B,
    note: &mut Note,
    uploads: Vec<Upload>,
) -> Result<()> {
    let mut next_id = next_attachment_id(store)?;
    // Ids already claimed by this in-flight note are not in the store yet.
    if let Some(max_local) = note.attachments.iter().map(|a| a.id).max() {
        next_id = next_id.max(max_local + 1);
    }
    for upload in uploads {
        let file_type = files::file_type(&upload.filename).unwrap_or_default();
        let storage = files::storage_name(&upload.filename);
        blobs.write(&storage, &upload.bytes)?;
        note.attachments.push(Attachment {
            id: next_id,
            note_id: note.id,
            filename: storage,
            original_filename: files::sanitize_filename(&upload.filename),
            file_type,
            uploaded_at: Utc::now(),
        });
        next_id += 1;
    }
    Ok(())
}
