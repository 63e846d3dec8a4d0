//! # Typed Managers
//!
//! One manager per entity. Each wraps any [`EntityStore`](store_framework::EntityStore) of
//! its entity (in memory by default) and speaks the entity's own vocabulary:
//! `create_product`, `add_to_cart`, `place_order` and so on. `read`, `list_all`, `insert`
//! and, for entities without dependencies, `delete` come from
//! [`Manager`](store_framework::Manager).
//!
//! Managers that other entities depend on implement the matching ledger trait:
//!
//! | Manager | Implements | Used by |
//! |---------|------------|---------|
//! | [`ProductManager`] | `StockLedger`, `ProductLookup` | carts, orders, document resolvers |
//! | [`OrderManager`] | `OrderLookup` | payments |
//! | [`RatingManager`] | `RatingLedger` | reviews |
//!
//! The file-backed variants of these managers are the handlers in [`crate::handlers`].

mod cart;
mod category;
mod order;
mod product;
mod review;
mod seller;
mod user;

pub use cart::CartManager;
pub use category::CategoryManager;
pub use order::{OrderManager, PaymentManager};
pub use product::ProductManager;
pub use review::{RatingManager, ReviewManager};
pub use seller::{InventoryManager, SellerManager};
pub use user::{AddressManager, UserManager};
