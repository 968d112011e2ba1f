use log::warn;

use crate::auth::{ensure_can_modify, Principal};
use crate::error::Result;
use crate::files::BlobStore;
use crate::store::NoteStore;

/// Deletes a note, cascading to its attachments.
///
/// Physical blobs are removed before the note record so a crash mid-way
/// leaves at worst an orphaned record, never an unowned file. A failed
/// physical removal is logged and swallowed; the cascade continues through
/// the remaining attachments and the record removal always proceeds.
pub fn run<S: NoteStore, B: BlobStore>(
    store: &mut S,
    blobs: &mut B,
    id: u64,
    actor: Option<&Principal>,
) -> Result<()> {
    let note = store.get(id)?;
    ensure_can_modify(actor, &note)?;

    for attachment in &note.attachments {
        if let Err(err) = blobs.delete(&attachment.filename) {
            warn!(
                "failed to delete blob {} for attachment {}: {}",
                attachment.filename, attachment.id, err
            );
        }
    }

    store.remove(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::NotewallError;
    use crate::files::memory::MemBlobs;
    use crate::files::Upload;
    use crate::model::NoteDraft;
    use crate::store::memory::InMemoryStore;

    fn seeded(uploads: Vec<Upload>, owner: Option<&str>) -> (InMemoryStore, MemBlobs, u64) {
        let mut store = InMemoryStore::new();
        let mut blobs = MemBlobs::new();
        let note = create::run(
            &mut store,
            &mut blobs,
            NoteDraft {
                body: "to be deleted".into(),
                ..Default::default()
            },
            uploads,
            owner.map(str::to_string),
            1024,
        )
        .unwrap();
        (store, blobs, note.id)
    }

    fn upload(name: &str) -> Upload {
        Upload {
            filename: name.into(),
            bytes: b"bytes".to_vec(),
        }
    }

    #[test]
    fn test_delete_cascades_two_attachments() {
        let (mut store, mut blobs, id) = seeded(vec![upload("a.pdf"), upload("b.png")], None);
        assert_eq!(blobs.len(), 2);

        run(&mut store, &mut blobs, id, None).unwrap();

        assert!(blobs.is_empty());
        assert!(matches!(
            store.get(id),
            Err(NotewallError::NoteNotFound(_))
        ));
    }

    #[test]
    fn test_delete_without_attachments_succeeds() {
        let (mut store, mut blobs, id) = seeded(vec![], None);
        run(&mut store, &mut blobs, id, None).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_blob_is_not_an_error() {
        let (mut store, mut blobs, id) = seeded(vec![upload("a.pdf")], None);
        // Simulate the physical object vanishing out from under us.
        let stored = store.get(id).unwrap().attachments[0].filename.clone();
        blobs.delete(&stored).unwrap();

        run(&mut store, &mut blobs, id, None).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_note_is_not_found() {
        let mut store = InMemoryStore::new();
        let mut blobs = MemBlobs::new();
        assert!(matches!(
            run(&mut store, &mut blobs, 42, None),
            Err(NotewallError::NoteNotFound(42))
        ));
    }

    #[test]
    fn test_delete_owned_note_requires_owner_or_admin() {
        let (mut store, mut blobs, id) = seeded(vec![], Some("uid-1"));
        let stranger = Principal::new("uid-2", "Stranger");
        assert!(matches!(
            run(&mut store, &mut blobs, id, Some(&stranger)),
            Err(NotewallError::Forbidden(_))
        ));
        assert!(store.get(id).is_ok());

        let admin = Principal::admin("root", "Root");
        run(&mut store, &mut blobs, id, Some(&admin)).unwrap();
        assert!(store.get(id).is_err());
    }
}
