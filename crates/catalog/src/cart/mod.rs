//! # Cart
//!
//! Shopping carts. A cart reserves stock as products are added: the units leave the
//! product's stock immediately and come back when the line is removed, the cart is
//! cleared or the cart is deleted.
//!
//! Stock moves go through the cart's context, a [`StockLedger`](crate::ledger::StockLedger),
//! which every [`ProductManager`](crate::managers::ProductManager) implements:
//!
//! ```rust
//! use catalog::managers::{CartManager, ProductManager};
//! use catalog::model::{ProductCreate, UserId};
//!
//! let mut products = ProductManager::new();
//! let mut carts = CartManager::new();
//! let widget = products
//!     .create_product(ProductCreate::new("Widget", "Tools", 10.0, 5))
//!     .unwrap();
//! let cart = carts.create_cart(UserId(1)).unwrap();
//!
//! carts.add_to_cart(cart.id, widget.id, 3, &mut products).unwrap();
//! assert_eq!(products.check_stock(widget.id).unwrap(), 2);
//!
//! carts.clear_cart(cart.id, &mut products).unwrap();
//! assert_eq!(products.check_stock(widget.id).unwrap(), 5);
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod record;

pub use actions::*;
pub use error::*;
pub use record::*;
