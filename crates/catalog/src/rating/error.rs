use crate::error::from_framework_error;
use crate::model::ProductId;
use store_framework::StorageError;
use thiserror::Error;

/// Rating errors. Ratings are keyed by the rated product's id.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RatingError {
    #[error("Rating not found for product: {0}")]
    NotFound(ProductId),

    #[error("Rating already exists: {0}")]
    AlreadyExists(String),

    #[error("Rating validation error: {0}")]
    Validation(String),

    #[error("Invalid rating value: {0}. Rating must be between 1 and 5")]
    InvalidRating(u8),

    #[error("Rating storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(RatingError, ProductId);
