use crate::error::{NotewallError, Result};
use crate::files::{self, BlobStore};
use crate::store::NoteStore;

/// A resolved attachment ready to serve.
#[derive(Debug, Clone)]
pub struct Download {
    pub bytes: Vec<u8>,
    /// The sanitized original name, for presentation.
    pub filename: String,
}

/// Resolves an attachment id to its stored bytes and original filename.
///
/// Storage-time sanitization already keeps traversal sequences out of
/// stored names; the check here rejects any index entry that somehow
/// carries one anyway, before touching the blob store.
pub fn run<S: NoteStore, B: BlobStore>(store: &S, blobs: &B, attachment_id: u64) -> Result<Download> {
    let attachment = store
        .list()?
        .into_iter()
        .flat_map(|n| n.attachments)
        .find(|a| a.id == attachment_id)
        .ok_or(NotewallError::AttachmentNotFound(attachment_id))?;

    if !files::is_traversal_safe(&attachment.filename) {
        return Err(NotewallError::PathSecurity(attachment.filename));
    }
    if !blobs.exists(&attachment.filename) {
        return Err(NotewallError::AttachmentNotFound(attachment_id));
    }

    Ok(Download {
        bytes: blobs.read(&attachment.filename)?,
        filename: attachment.original_filename,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::files::memory::MemBlobs;
    use crate::files::Upload;
    use crate::model::NoteDraft;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> (InMemoryStore, MemBlobs, u64) {
        let mut store = InMemoryStore::new();
        let mut blobs = MemBlobs::new();
        let note = create::run(
            &mut store,
            &mut blobs,
            NoteDraft {
                body: "has a file".into(),
                ..Default::default()
            },
            vec![Upload {
                filename: "syllabus.pdf".into(),
                bytes: b"pdf-bytes".to_vec(),
            }],
            None,
            1024,
        )
        .unwrap();
        (store, blobs, note.attachments[0].id)
    }

    #[test]
    fn test_download_returns_bytes_and_original_name() {
        let (store, blobs, attachment_id) = seeded();
        let download = run(&store, &blobs, attachment_id).unwrap();
        assert_eq!(download.bytes, b"pdf-bytes");
        assert_eq!(download.filename, "syllabus.pdf");
    }

    #[test]
    fn test_download_unknown_id_is_not_found() {
        let (store, blobs, _) = seeded();
        assert!(matches!(
            run(&store, &blobs, 999),
            Err(NotewallError::AttachmentNotFound(999))
        ));
    }

    #[test]
    fn test_download_missing_blob_is_not_found() {
        let (store, mut blobs, attachment_id) = seeded();
        let stored = store.get(1).unwrap().attachments[0].filename.clone();
        blobs.delete(&stored).unwrap();
        assert!(matches!(
            run(&store, &blobs, attachment_id),
            Err(NotewallError::AttachmentNotFound(_))
        ));
    }

    #[test]
    fn test_download_rejects_traversal_in_stored_name() {
        let (mut store, blobs, attachment_id) = seeded();
        // Corrupt the index entry to simulate a poisoned record.
        let mut note = store.get(1).unwrap();
        note.attachments[0].filename = "../escape.pdf".into();
        store.update(&note).unwrap();

        assert!(matches!(
            run(&store, &blobs, attachment_id),
            Err(NotewallError::PathSecurity(_))
        ));
    }
}
