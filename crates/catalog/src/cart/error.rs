use crate::error::from_framework_error;
use crate::model::{CartId, ProductId, UserId};
use crate::product::ProductError;
use store_framework::StorageError;
use thiserror::Error;

/// Cart errors. Stock failures from the product side arrive as [`CartError::Stock`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    NotFound(CartId),

    #[error("Cart already exists: {0}")]
    AlreadyExists(String),

    #[error("Cart validation error: {0}")]
    Validation(String),

    #[error("Product {0} is not in the cart")]
    ProductNotInCart(ProductId),

    #[error("No cart for user {0}")]
    NoCartForUser(UserId),

    #[error(transparent)]
    Stock(#[from] ProductError),

    #[error("Cart storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(CartError, CartId);
