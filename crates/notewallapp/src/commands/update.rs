use log::warn;

use crate::auth::{ensure_can_modify, Principal};
use crate::error::Result;
use crate::files::{self, BlobStore, Upload};
use crate::model::{Note, NoteDelta};
use crate::store::NoteStore;
use crate::tags;

use super::create::attach_uploads;

/// Edits a note: applies the delta, re-extracts tags and hashtags, removes
/// the selected attachments, and stores new uploads.
///
/// Fails with `NoteNotFound` before the ownership check, and `Forbidden`
/// when the actor is neither owner nor admin. Attachment ids absent from
/// the note are ignored; removal of the rest follows the cascade's
/// per-item contract (best-effort physical delete, record always removed).
pub fn run<S: NoteStore, B: BlobStore>(
    store: &mut S,
    blobs: &mut B,
    id: u64,
    delta: NoteDelta,
    uploads: Vec<Upload>,
    remove_attachment_ids: &[u64],
    actor: Option<&Principal>,
    max_upload_bytes: usize,
) -> Result<Note> {
    let mut note = store.get(id)?;
    ensure_can_modify(actor, &note)?;
    for upload in &uploads {
        files::validate_upload(upload, max_upload_bytes)?;
    }

    note.apply_delta(&delta);

    let raw_tags = match delta.tags.as_deref() {
        Some(raw) => raw.to_string(),
        None => note.tags.join(", "),
    };
    let extracted = tags::extract(&note.body, &raw_tags);
    note.tags = extracted.tags;
    note.hashtags = extracted.hashtags;

    if !remove_attachment_ids.is_empty() {
        remove_selected(blobs, &mut note, remove_attachment_ids);
    }
    if !uploads.is_empty() {
        attach_uploads(store, blobs, &mut note, uploads)?;
    }

    store.update(&note)?;
    Ok(note)
}

fn remove_selected<B: BlobStore>(blobs: &mut B, note: &mut Note, ids: &[u64]) {
    note.attachments.retain(|attachment| {
        if !ids.contains(&attachment.id) {
            return true;
        }
        if let Err(err) = blobs.delete(&attachment.filename) {
            warn!(
                "failed to delete blob {} for attachment {}: {}",
                attachment.filename, attachment.id, err
            );
        }
        false
    });
}
