use crate::error::from_framework_error;
use crate::model::ReviewId;
use crate::rating::RatingError;
use store_framework::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(ReviewId),

    #[error("Review already exists: {0}")]
    AlreadyExists(String),

    #[error("Review validation error: {0}")]
    Validation(String),

    #[error("Invalid review rating: {0}. Rating must be between 1 and 5")]
    InvalidRating(u8),

    /// The product's aggregate rating could not be updated.
    #[error(transparent)]
    Rating(#[from] RatingError),

    #[error("Review storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(ReviewError, ReviewId);
