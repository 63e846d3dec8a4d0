//! # Rating
//!
//! One aggregate score per product, keyed by the product's id. Reviews feed it through the
//! [`RatingLedger`](crate::ledger::RatingLedger); it can also be rated or reset directly.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::{check_score, MAX_SCORE, MIN_SCORE};
pub use error::*;
