//! # Order
//!
//! Customer orders. An order is created from a non-empty cart snapshot, owns that snapshot
//! and the delivery address, and moves through `Pending → Placed → {Cancelled, Completed}`.
//!
//! ## Structure
//!
//! - [`entity`] - hooks and the state machine
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`]
//! - [`record`] - the flattened document record

pub mod actions;
pub mod entity;
pub mod error;
pub mod record;

pub use actions::*;
pub use error::*;
pub use record::*;
