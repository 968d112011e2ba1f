use crate::error::Result;
use crate::store::NoteStore;

/// Increments a note's like counter and returns the new count.
pub fn run<S: NoteStore>(store: &mut S, id: u64) -> Result<u64> {
    let mut note = store.get(id)?;
    note.likes += 1;
    store.update(&note)?;
    Ok(note.likes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotewallError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_like_increments() {
        let mut fixture = StoreFixture::new().with_notes(1);
        assert_eq!(run(&mut fixture.store, 1).unwrap(), 1);
        assert_eq!(run(&mut fixture.store, 1).unwrap(), 2);
        assert_eq!(fixture.store.get(1).unwrap().likes, 2);
    }

    #[test]
    fn test_like_unknown_note_fails() {
        let mut fixture = StoreFixture::new();
        assert!(matches!(
            run(&mut fixture.store, 5),
            Err(NotewallError::NoteNotFound(5))
        ));
    }
}
