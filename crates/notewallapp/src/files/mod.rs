//! # Attachment Lifecycle
//!
//! Uploads pass three gates before any bytes are written: an extension
//! allow-list, a size ceiling, and filename sanitization. The stored name
//! is never derived solely from user input: a random UUID prefix makes it
//! collision-resistant and keeps traversal sequences out of the storage
//! root.
//!
//! The [`BlobStore`] trait abstracts the physical object store. Deletion is
//! idempotent by contract: removing an absent blob succeeds, which is what
//! lets the cascade delete retry safely after a partial failure.
//!
//! Download-time resolution re-checks the stored name for traversal
//! sequences even though storage-time sanitization already prevents them;
//! an index entry that somehow carries one is rejected outright.

use uuid::Uuid;

use crate::error::{NotewallError, Result};

pub mod local;
pub mod memory;

/// File extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 10] = [
    "pdf", "png", "jpg", "jpeg", "gif", "doc", "docx", "txt", "ppt", "pptx",
];

/// Uploads above this many bytes are rejected before any write.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// An upload candidate as it arrives from the transport layer.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Physical object store for attachment content.
pub trait BlobStore {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()>;

    fn read(&self, name: &str) -> Result<Vec<u8>>;

    fn exists(&self, name: &str) -> bool;

    /// Remove a blob. Absence is not an error.
    fn delete(&mut self, name: &str) -> Result<()>;
}

/// True iff the filename carries an allow-listed extension. A name without
/// a dot has no extension and is rejected; with multiple dots only the
/// final segment counts.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Lowercased final extension, for the attachment record.
pub fn file_type(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Strips a user-supplied filename down to a safe basename: path
/// components are dropped, whitespace becomes underscores, and anything
/// outside `[A-Za-z0-9._-]` is removed. Leading dots go too, so the result
/// can never be hidden or relative. An empty result becomes "file".
pub fn sanitize_filename(name: &str) -> String {
    let basename = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("");
    let mut cleaned: String = basename
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();
    while cleaned.contains("..") {
        cleaned = cleaned.replace("..", ".");
    }
    let cleaned = cleaned.trim_start_matches(['.', '-']).to_string();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

/// Collision-free storage name: random UUID prefix plus the sanitized
/// original.
pub fn storage_name(original: &str) -> String {
    format!("{}_{}", Uuid::new_v4(), sanitize_filename(original))
}

/// Download-time defense: reject stored names carrying traversal sequences
/// or absolute-path markers.
pub fn is_traversal_safe(stored: &str) -> bool {
    !stored.contains("..") && !stored.starts_with('/') && !stored.starts_with('\\')
}

/// Gate an upload candidate: extension allow-list, then size ceiling.
pub fn validate_upload(upload: &Upload, max_bytes: usize) -> Result<()> {
    if !allowed_file(&upload.filename) {
        return Err(NotewallError::Validation(format!(
            "file type not allowed: {}",
            upload.filename
        )));
    }
    if upload.bytes.len() > max_bytes {
        return Err(NotewallError::Validation(format!(
            "file too large: {} exceeds {} bytes",
            upload.filename, max_bytes
        )));
    }
    Ok(())
}
