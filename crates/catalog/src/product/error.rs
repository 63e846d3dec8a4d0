//! Error types for Product stores.

use crate::error::from_framework_error;
use crate::model::ProductId;
use store_framework::StorageError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    /// Malformed or out-of-range input (empty name, negative price, ...).
    #[error("Product validation error: {0}")]
    Validation(String),

    /// A stock change would drive the stock below zero.
    #[error("Insufficient stock for {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: ProductId,
        requested: u64,
        available: u32,
    },

    #[error("Product storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(ProductError, ProductId);
