use crate::cart::CartError;
use crate::error::from_framework_error;
use crate::model::{OrderId, OrderStatus, UserId};
use store_framework::StorageError;
use thiserror::Error;

/// Order operation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Order already exists: {0}")]
    AlreadyExists(String),

    #[error("Order validation error: {0}")]
    Validation(String),

    #[error("Cannot create an order from an empty cart")]
    EmptyCart,

    #[error("Order {id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("No orders for user {0}")]
    NoOrdersForUser(UserId),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("Order storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(OrderError, OrderId);
