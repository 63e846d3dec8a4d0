//! # Product
//!
//! Catalog products with stock and price management.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) and
//!   [`Persisted`](store_framework::Persisted) implementations for [`Product`](crate::model::Product)
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//!
//! ## Custom Actions
//!
//! ```rust
//! use catalog::managers::ProductManager;
//! use catalog::model::ProductCreate;
//!
//! let mut products = ProductManager::new();
//! let widget = products
//!     .create_product(ProductCreate::new("Widget", "Tools", 10.0, 5))
//!     .unwrap();
//!
//! // Relative stock move, fails instead of going negative
//! assert_eq!(products.update_stock(widget.id, -3).unwrap(), 2);
//! assert!(products.update_stock(widget.id, -3).is_err());
//! assert!(products.check_availability(widget.id).unwrap());
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
