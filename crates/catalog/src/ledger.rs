//! Narrow interfaces through which one entity's hooks reach another entity's store.
//!
//! These are the `Context` types of the entities that need them. Managers implement them
//! for any backend, so a cart kept in a JSON document can move stock held in memory and
//! the other way round.

use crate::model::{Order, OrderId, Product, ProductId, Rating};
use crate::product::ProductError;
use crate::rating::RatingError;

/// Read access to products, used to rebuild product references when loading documents.
pub trait ProductLookup {
    fn find_product(&self, id: ProductId) -> Option<Product>;
}

/// Moves units between product stock and carts.
pub trait StockLedger {
    /// Take `quantity` units out of stock and return the updated product.
    fn take_stock(&mut self, id: ProductId, quantity: u32) -> Result<Product, ProductError>;

    /// Put `quantity` units back into stock and return the updated product.
    fn restore_stock(&mut self, id: ProductId, quantity: u32) -> Result<Product, ProductError>;
}

/// Read access to orders, used by payments to check amount and status.
pub trait OrderLookup {
    fn find_order(&self, id: OrderId) -> Option<Order>;
}

/// Feeds review scores into the per-product ratings.
pub trait RatingLedger {
    /// Apply one score to the product's rating, creating the rating if it does not exist.
    fn record_rating(&mut self, product_id: ProductId, score: u8) -> Result<Rating, RatingError>;
}

/// Context for calls whose hooks never consult their dependencies, such as creating an
/// empty cart or patching an order's address. Any call into it is refused.
pub(crate) struct Detached;

impl Detached {
    fn refused(what: &str) -> String {
        format!("{what} is not available in this operation")
    }
}

impl StockLedger for Detached {
    fn take_stock(&mut self, _id: ProductId, _quantity: u32) -> Result<Product, ProductError> {
        Err(ProductError::Validation(Self::refused("stock ledger")))
    }

    fn restore_stock(&mut self, _id: ProductId, _quantity: u32) -> Result<Product, ProductError> {
        Err(ProductError::Validation(Self::refused("stock ledger")))
    }
}

impl OrderLookup for Detached {
    fn find_order(&self, _id: OrderId) -> Option<Order> {
        None
    }
}

impl RatingLedger for Detached {
    fn record_rating(&mut self, _product_id: ProductId, _score: u8) -> Result<Rating, RatingError> {
        Err(RatingError::Validation(Self::refused("rating ledger")))
    }
}
