//! # Inventory
//!
//! The product stock a seller offers, keyed by the seller's id. Stock and price changes here
//! affect the seller's copy only, never the catalog product.

pub mod actions;
pub mod entity;
pub mod error;
pub mod record;

pub use actions::*;
pub use error::*;
pub use record::*;
