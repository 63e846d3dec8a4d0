use crate::error::from_framework_error;
use crate::model::{CategoryId, ProductId};
use store_framework::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    #[error("Category already exists: {0}")]
    AlreadyExists(String),

    #[error("Category validation error: {0}")]
    Validation(String),

    #[error("Product {0} is already in the category")]
    DuplicateProduct(ProductId),

    #[error("Product {0} is not in the category")]
    ProductNotInCategory(ProductId),

    #[error("Category storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(CategoryError, CategoryId);
