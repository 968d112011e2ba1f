//! # Command Layer
//!
//! This module contains the **core business logic** of notewall. Each
//! operation lives in its own submodule and implements plain functions
//! generic over [`crate::store::NoteStore`] (and, where files are
//! involved, [`crate::files::BlobStore`]).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O formatting**: no stdout, stderr, or terminal concerns
//! - **Argument parsing**: that's the transport layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return typed values (`Listing`, `Note`, `Download`), never
//! strings. The transport layer (CLI, web, etc.) decides how to render.
//!
//! ## Ordering Contracts
//!
//! - `create` validates every upload candidate before the note is
//!   inserted, so a rejected file never leaves a half-created note behind.
//!   The note is inserted before its attachments are stored because an
//!   attachment record needs the note's assigned id.
//! - `delete` removes physical attachment blobs before the note record, so
//!   a crash mid-delete leaves at worst an orphaned record, never an
//!   orphaned file without an index entry. Physical removal failures are
//!   logged and swallowed; record removal always proceeds.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and `MemBlobs` to exercise every branch without
//! touching the filesystem.

pub mod comment;
pub mod create;
pub mod delete;
pub mod download;
pub mod like;
pub mod list;
pub mod update;
