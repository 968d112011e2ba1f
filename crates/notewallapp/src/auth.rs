//! Principal identity and ownership checks.
//!
//! Whatever identity provider fronts a deployment, the transport resolves
//! its credential into one plain [`Principal`] value at request time; the
//! core never talks to the provider itself. Notes created without
//! authentication carry no owner and stay editable by anyone, which
//! matches the earliest deployment.

use crate::error::{NotewallError, Result};
use crate::model::Note;

/// The authenticated actor behind a request, assembled once at
/// authentication time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub display_name: String,
    pub is_admin: bool,
}

impl Principal {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            is_admin: false,
        }
    }

    pub fn admin(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::new(id, display_name)
        }
    }

    /// Owner or admin may modify; anyone may modify an unowned note.
    pub fn can_modify(&self, note: &Note) -> bool {
        match note.owner.as_deref() {
            None => true,
            Some(owner) => self.is_admin || owner == self.id,
        }
    }
}

/// Gate an edit/delete: owned notes require a matching or admin principal.
pub fn ensure_can_modify(actor: Option<&Principal>, note: &Note) -> Result<()> {
    let allowed = match (actor, note.owner.as_deref()) {
        (_, None) => true,
        (Some(principal), Some(_)) => principal.can_modify(note),
        (None, Some(_)) => false,
    };
    if allowed {
        Ok(())
    } else {
        Err(NotewallError::Forbidden(format!(
            "note {} belongs to another user",
            note.id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, NoteDraft};

    fn owned_note(owner: Option<&str>) -> Note {
        Note::from_draft(
            &NoteDraft {
                body: "body".into(),
                ..Default::default()
            },
            owner.map(str::to_string),
        )
    }

    #[test]
    fn test_unowned_note_open_to_all() {
        let note = owned_note(None);
        assert!(ensure_can_modify(None, &note).is_ok());
        assert!(ensure_can_modify(Some(&Principal::new("u1", "U One")), &note).is_ok());
    }

    #[test]
    fn test_owner_can_modify() {
        let note = owned_note(Some("u1"));
        let principal = Principal::new("u1", "U One");
        assert!(ensure_can_modify(Some(&principal), &note).is_ok());
    }

    #[test]
    fn test_stranger_forbidden() {
        let note = owned_note(Some("u1"));
        let principal = Principal::new("u2", "U Two");
        assert!(matches!(
            ensure_can_modify(Some(&principal), &note),
            Err(NotewallError::Forbidden(_))
        ));
    }

    #[test]
    fn test_anonymous_forbidden_on_owned_note() {
        let note = owned_note(Some("u1"));
        assert!(ensure_can_modify(None, &note).is_err());
    }

    #[test]
    fn test_admin_overrides_ownership() {
        let note = owned_note(Some("u1"));
        let admin = Principal::admin("root", "Root");
        assert!(ensure_can_modify(Some(&admin), &note).is_ok());
    }
}
