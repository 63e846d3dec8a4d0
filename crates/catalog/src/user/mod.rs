//! # User
//!
//! Registered customers. A user carries at most one embedded [`Address`](crate::model::Address)
//! and is unique by email.

pub mod entity;
pub mod error;

pub use error::*;
