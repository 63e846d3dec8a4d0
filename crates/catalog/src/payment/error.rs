use crate::error::from_framework_error;
use crate::model::{OrderId, OrderStatus, PaymentId, PaymentStatus};
use store_framework::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Payment not found: {0}")]
    NotFound(PaymentId),

    #[error("Payment already exists: {0}")]
    AlreadyExists(String),

    #[error("Payment validation error: {0}")]
    Validation(String),

    #[error("Order not found for payment: {0}")]
    OrderNotFound(OrderId),

    #[error("Payment amount {actual} does not match order total {expected}")]
    AmountMismatch { expected: f64, actual: f64 },

    #[error("Order {order_id} is {status}, not Placed")]
    OrderNotPlaced {
        order_id: OrderId,
        status: OrderStatus,
    },

    #[error("Payment {id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        id: PaymentId,
        from: PaymentStatus,
        to: PaymentStatus,
    },

    #[error("Payment storage error: {0}")]
    Storage(StorageError),
}

from_framework_error!(PaymentError, PaymentId);
