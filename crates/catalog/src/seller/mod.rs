//! # Seller
//!
//! Merchants. Each seller owns exactly one [`Inventory`](crate::model::Inventory), created
//! empty with the seller, and every product operation on a seller is forwarded to it.

pub mod actions;
pub mod entity;
pub mod error;
pub mod record;

pub use actions::*;
pub use error::*;
pub use record::*;
