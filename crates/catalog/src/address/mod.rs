//! # Address
//!
//! Postal addresses owned by users. Addresses are flat records with no actions beyond CRUD.

pub mod entity;
pub mod error;

pub use error::*;
