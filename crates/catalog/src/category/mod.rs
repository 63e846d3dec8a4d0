//! # Category
//!
//! Named groups of products. Membership is by product id: a product can belong to many
//! categories but appears at most once in each.
//!
//! Category documents store member ids only; loading looks each one up again through a
//! [`ProductLookup`](crate::ledger::ProductLookup) and drops members that no longer exist.

pub mod actions;
pub mod entity;
pub mod error;
pub mod record;

pub use actions::*;
pub use error::*;
pub use record::*;
