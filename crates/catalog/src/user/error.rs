use crate::error::from_framework_error;
use crate::model::UserId;
use store_framework::StorageError;
use thiserror::Error;

/// User operation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Raised for a taken id or a taken email.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("User validation error: {0}")]
    Validation(String),

    #[error("User storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(UserError, UserId);
