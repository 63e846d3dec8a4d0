//! # File Handlers
//!
//! A handler is a typed manager over a [`DocumentStore`]: the same operations as the
//! in-memory manager, but every call reads the whole JSON or XML document, applies the
//! change and writes the document back.
//!
//! Handlers for entities that hold products (carts, categories, inventories, sellers) are
//! opened with a [`ProductLookup`], usually a product handler for the same data directory.
//! Products that lookup no longer knows are dropped when records are loaded.
//!
//! ```rust
//! use std::sync::Arc;
//! use catalog::handlers::{CartJsonHandler, ProductJsonHandler};
//! use catalog::ledger::ProductLookup;
//! use catalog::model::{ProductCreate, UserId};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut products = ProductJsonHandler::open(dir.path().join("products.json"));
//! let lookup: Arc<dyn ProductLookup> =
//!     Arc::new(ProductJsonHandler::open(dir.path().join("products.json")));
//! let mut carts = CartJsonHandler::open(dir.path().join("carts.json"), lookup);
//!
//! let lamp = products
//!     .create_product(ProductCreate::new("Lamp", "Home", 18.0, 2))
//!     .unwrap();
//! let cart = carts.create_cart(UserId(1)).unwrap();
//! carts.add_to_cart(cart.id, lamp.id, 2, &mut products).unwrap();
//!
//! // A fresh handler over the same file sees the change
//! assert_eq!(
//!     ProductJsonHandler::open(dir.path().join("products.json"))
//!         .check_stock(lamp.id)
//!         .unwrap(),
//!     0
//! );
//! ```

use crate::ledger::ProductLookup;
use crate::managers::{
    AddressManager, CartManager, CategoryManager, InventoryManager, OrderManager,
    PaymentManager, ProductManager, RatingManager, ReviewManager, SellerManager, UserManager,
};
use crate::model::{
    Address, Cart, Category, Inventory, Order, Payment, Product, Rating, Review, Seller, User,
};
use std::path::PathBuf;
use std::sync::Arc;
use store_framework::{DocumentFormat, DocumentStore, Json, Xml};

macro_rules! handlers {
    ($manager:ident, $entity:ty, $handler:ident, $json:ident, $xml:ident) => {
        #[doc = concat!("[`", stringify!($manager), "`] persisted to a document of format `F`.")]
        pub type $handler<F> = $manager<DocumentStore<$entity, F>>;
        pub type $json = $handler<Json>;
        pub type $xml = $handler<Xml>;
    };
}

/// `open(path)` for handlers whose records reference nothing else.
macro_rules! open_flat {
    ($($handler:ident),* $(,)?) => {$(
        impl<F: DocumentFormat> $handler<F> {
            pub fn open(path: impl Into<PathBuf>) -> Self {
                Self::with_store(DocumentStore::open(path))
            }
        }
    )*};
}

/// `open(path, products)` for handlers that rebuild product references on load.
macro_rules! open_resolved {
    ($($handler:ident),* $(,)?) => {$(
        impl<F: DocumentFormat> $handler<F> {
            pub fn open(path: impl Into<PathBuf>, products: Arc<dyn ProductLookup>) -> Self {
                Self::with_store(DocumentStore::with_resolver(path, products))
            }
        }
    )*};
}

handlers!(UserManager, User, UserHandler, UserJsonHandler, UserXmlHandler);
handlers!(AddressManager, Address, AddressHandler, AddressJsonHandler, AddressXmlHandler);
handlers!(ProductManager, Product, ProductHandler, ProductJsonHandler, ProductXmlHandler);
handlers!(CategoryManager, Category, CategoryHandler, CategoryJsonHandler, CategoryXmlHandler);
handlers!(
    InventoryManager,
    Inventory,
    InventoryHandler,
    InventoryJsonHandler,
    InventoryXmlHandler
);
handlers!(SellerManager, Seller, SellerHandler, SellerJsonHandler, SellerXmlHandler);
handlers!(CartManager, Cart, CartHandler, CartJsonHandler, CartXmlHandler);
handlers!(OrderManager, Order, OrderHandler, OrderJsonHandler, OrderXmlHandler);
handlers!(PaymentManager, Payment, PaymentHandler, PaymentJsonHandler, PaymentXmlHandler);
handlers!(RatingManager, Rating, RatingHandler, RatingJsonHandler, RatingXmlHandler);
handlers!(ReviewManager, Review, ReviewHandler, ReviewJsonHandler, ReviewXmlHandler);

open_flat!(
    UserHandler,
    AddressHandler,
    ProductHandler,
    OrderHandler,
    PaymentHandler,
    RatingHandler,
    ReviewHandler,
);
open_resolved!(CategoryHandler, InventoryHandler, SellerHandler, CartHandler);
