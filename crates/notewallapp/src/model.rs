//! # Domain Model: Notes, Comments, and Attachments
//!
//! This module defines the core data structures for notewall: [`Note`], its
//! child records [`Comment`] and [`Attachment`], and the request shapes
//! [`NoteDraft`] and [`NoteDelta`].
//!
//! ## Identity
//!
//! Notes carry a monotonically assigned integer id: the store hands out
//! `max existing id + 1` (1 for an empty collection). The id and the
//! `created` timestamp are immutable for the note's lifetime. Attachment ids
//! share the same scheme across the whole collection so a download request
//! can resolve one without knowing its parent.
//!
//! ## Draft Normalization
//!
//! Submissions arrive chaotic: blank authors, missing titles, stray
//! whitespace. [`Note::from_draft`] applies the canonical fallbacks
//! (author "Anonymous", title "Untitled", class "General") so the rest of
//! the system never sees an empty field except `body`, which is required
//! and validated at the command layer.
//!
//! ## Edit Semantics
//!
//! [`NoteDelta`] fields are all optional; an absent or blank field preserves
//! the current value. `id`, `created`, and `owner` are never touched by an
//! edit.
//!
//! ## Legacy Tolerance
//!
//! Earlier deployments serialized notes without likes, comments, tags,
//! hashtags, or owner. Those fields default on deserialization so an old
//! `notes.json` loads cleanly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed class-code enumeration offered by the filter dropdown.
pub const CLASS_CODES: [&str; 10] = [
    "CS124", "CS128", "CS173", "MATH221", "MATH231", "ENG100", "CS100", "RHET105", "PHY211",
    "PHY212",
];

/// Fallback bucket for notes not tied to an enumerated class.
pub const GENERAL_CLASS: &str = "General";

pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_TITLE: &str = "Untitled";

/// Maps raw class input onto the enumeration, falling back to "General".
pub fn normalize_class_code(raw: &str) -> String {
    let trimmed = raw.trim();
    if CLASS_CODES.contains(&trimmed) {
        trimmed.to_string()
    } else {
        GENERAL_CLASS.to_string()
    }
}

/// A user-authored post with class association, body, and child records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub class_code: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Identifier of the creating principal. `None` in deployments without
    /// authentication; when present it gates edit/delete.
    #[serde(default)]
    pub owner: Option<String>,
}

impl Note {
    /// Builds a note from a raw draft, applying the canonical fallbacks.
    ///
    /// The id is a placeholder (0) until the store assigns the real one on
    /// insert. Body emptiness is validated at the command layer, not here.
    pub fn from_draft(draft: &NoteDraft, owner: Option<String>) -> Self {
        let author = non_blank_or(&draft.author, DEFAULT_AUTHOR);
        let title = non_blank_or(&draft.title, DEFAULT_TITLE);
        Self {
            id: 0,
            author,
            title,
            body: draft.body.trim().to_string(),
            class_code: normalize_class_code(&draft.class_code),
            created: Utc::now(),
            tags: Vec::new(),
            hashtags: Vec::new(),
            likes: 0,
            comments: Vec::new(),
            attachments: Vec::new(),
            owner,
        }
    }

    /// Applies an edit delta in place. Empty or absent fields preserve the
    /// current value; `id`, `created`, and `owner` are never modified.
    pub fn apply_delta(&mut self, delta: &NoteDelta) {
        if let Some(title) = delta.title.as_deref() {
            if !title.trim().is_empty() {
                self.title = title.trim().to_string();
            }
        }
        if let Some(body) = delta.body.as_deref() {
            if !body.trim().is_empty() {
                self.body = body.trim().to_string();
            }
        }
        if let Some(author) = delta.author.as_deref() {
            if !author.trim().is_empty() {
                self.author = author.trim().to_string();
            }
        }
        if let Some(class_code) = delta.class_code.as_deref() {
            if !class_code.trim().is_empty() {
                self.class_code = normalize_class_code(class_code);
            }
        }
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Free-form reply to a note. Append-only; insertion order is chronological.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub body: String,
    pub created: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &str, body: &str) -> Self {
        Self {
            author: non_blank_or(author, DEFAULT_AUTHOR),
            body: body.trim().to_string(),
            created: Utc::now(),
        }
    }
}

/// A file bound to exactly one note, identified separately from its
/// on-disk name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u64,
    pub note_id: u64,
    /// Server-generated, collision-resistant storage name.
    pub filename: String,
    /// Sanitized user-supplied name, kept for presentation.
    pub original_filename: String,
    /// Lowercase extension, validated against the allow-list at upload time.
    pub file_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Raw creation request shape, before normalization.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub author: String,
    pub title: String,
    pub body: String,
    pub class_code: String,
    /// Raw comma-separated tag input, parsed by the extractor.
    pub tags: String,
}

/// Raw edit request shape. All fields optional; blank values preserve the
/// current state.
#[derive(Debug, Clone, Default)]
pub struct NoteDelta {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub class_code: Option<String>,
    /// Raw comma-separated tag input; `None` keeps the current tag set.
    pub tags: Option<String>,
}

/// Raw comment submission shape.
#[derive(Debug, Clone, Default)]
pub struct CommentDraft {
    pub author: String,
    pub body: String,
}
