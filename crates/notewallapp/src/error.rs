use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotewallError {
    #[error("Note not found: {0}")]
    NoteNotFound(u64),

    #[error("Attachment not found: {0}")]
    AttachmentNotFound(u64),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The summarizer was handed blank text (or text with no usable sentences).
    #[error("Nothing to summarize: input is empty")]
    EmptyInput,

    #[error("Unsafe storage path rejected: {0}")]
    PathSecurity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, NotewallError>;
