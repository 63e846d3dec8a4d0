use crate::error::from_framework_error;
use crate::model::{ProductId, SellerId};
use store_framework::StorageError;
use thiserror::Error;

/// Inventory errors. Inventories are keyed by their seller's id.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Inventory not found for seller: {0}")]
    NotFound(SellerId),

    #[error("Inventory already exists: {0}")]
    AlreadyExists(String),

    #[error("Inventory validation error: {0}")]
    Validation(String),

    #[error("Product {0} is already in the inventory")]
    DuplicateProduct(ProductId),

    #[error("Product {0} is not in the inventory")]
    ProductNotFound(ProductId),

    #[error("Inventory storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(InventoryError, SellerId);
