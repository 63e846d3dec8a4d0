use crate::error::from_framework_error;
use crate::model::AddressId;
use store_framework::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    #[error("Address not found: {0}")]
    NotFound(AddressId),

    #[error("Address already exists: {0}")]
    AlreadyExists(String),

    #[error("Address validation error: {0}")]
    Validation(String),

    #[error("Address storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(AddressError, AddressId);
