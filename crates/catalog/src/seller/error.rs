use crate::error::from_framework_error;
use crate::inventory::InventoryError;
use crate::model::SellerId;
use store_framework::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SellerError {
    #[error("Seller not found: {0}")]
    NotFound(SellerId),

    #[error("Seller already exists: {0}")]
    AlreadyExists(String),

    #[error("Seller validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Seller storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(SellerError, SellerId);
