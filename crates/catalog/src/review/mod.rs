//! # Review
//!
//! A user's review of a product. Creating a review applies its score to the product's
//! [`Rating`](crate::model::Rating) through a [`RatingLedger`](crate::ledger::RatingLedger),
//! creating the rating on first use. Editing or deleting a review leaves the aggregate as is.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
