//! # Payment
//!
//! Payments against orders, moving through `Unpaid → Paid → Refunded`. A payment is only
//! accepted for the exact order total and only processed once its order has been placed.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
