//! # Framework Errors
//!
//! Common error types shared by every store. Entity error enums convert from
//! [`FrameworkError`] so stores can surface lookup and persistence failures in the
//! entity's own vocabulary.

/// Errors raised by the stores themselves, independent of any entity's rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },
    #[error("{entity} already exists: {key}")]
    AlreadyExists { entity: &'static str, key: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures while reading or writing a backing document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },
    #[error("failed to encode {collection}: {message}")]
    Encode {
        collection: &'static str,
        message: String,
    },
    #[error("failed to decode {collection}: {message}")]
    Decode {
        collection: &'static str,
        message: String,
    },
}
