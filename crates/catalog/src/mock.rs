//! # Ledger Mocks
//!
//! Test doubles for the ledger traits, in the same expectation style as
//! [`store_framework::mock::MockStore`]: queue the calls you expect with their responses,
//! run the code under test, then `verify()` that nothing is left over.
//!
//! [`MockStockLedger`] also answers [`ProductLookup`] from a fixed table so document
//! resolvers can be tested without a product store.
//!
//! ```rust
//! use catalog::ledger::StockLedger;
//! use catalog::mock::MockStockLedger;
//! use catalog::model::{Product, ProductId};
//! use catalog::product::ProductError;
//!
//! let widget = Product {
//!     id: ProductId(1),
//!     name: "Widget".into(),
//!     category: "Tools".into(),
//!     price: 10.0,
//!     stock: 2,
//! };
//! let mut ledger = MockStockLedger::new();
//! ledger.expect_take(ProductId(1), 3).return_ok(widget);
//! ledger.expect_restore(ProductId(9), 1).return_err(ProductError::NotFound(ProductId(9)));
//!
//! assert_eq!(ledger.take_stock(ProductId(1), 3).unwrap().stock, 2);
//! assert!(ledger.restore_stock(ProductId(9), 1).is_err());
//! ledger.verify();
//! ```

use crate::ledger::{ProductLookup, StockLedger};
use crate::model::{Product, ProductId};
use crate::product::ProductError;
use indexmap::IndexMap;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StockMove {
    Take,
    Restore,
}

struct Expectation {
    kind: StockMove,
    id: ProductId,
    quantity: u32,
    response: Result<Product, ProductError>,
}

/// A [`StockLedger`] that replays queued expectations in order.
#[derive(Default)]
pub struct MockStockLedger {
    expectations: VecDeque<Expectation>,
    known: IndexMap<ProductId, Product>,
}

impl MockStockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `product` visible through [`ProductLookup`].
    pub fn with_product(mut self, product: Product) -> Self {
        self.known.insert(product.id, product);
        self
    }

    pub fn expect_take(&mut self, id: ProductId, quantity: u32) -> LedgerExpectation<'_> {
        LedgerExpectation {
            ledger: self,
            kind: StockMove::Take,
            id,
            quantity,
        }
    }

    pub fn expect_restore(&mut self, id: ProductId, quantity: u32) -> LedgerExpectation<'_> {
        LedgerExpectation {
            ledger: self,
            kind: StockMove::Restore,
            id,
            quantity,
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn answer(
        &mut self,
        kind: StockMove,
        id: ProductId,
        quantity: u32,
    ) -> Result<Product, ProductError> {
        let Some(expected) = self.expectations.pop_front() else {
            panic!("Unexpected {kind:?} of {quantity} x {id}: no expectations left");
        };
        if (expected.kind, expected.id, expected.quantity) != (kind, id, quantity) {
            panic!(
                "Expected {:?} of {} x {}, got {kind:?} of {quantity} x {id}",
                expected.kind, expected.quantity, expected.id
            );
        }
        expected.response
    }
}

/// Builder returned by the `expect_*` methods.
pub struct LedgerExpectation<'a> {
    ledger: &'a mut MockStockLedger,
    kind: StockMove,
    id: ProductId,
    quantity: u32,
}

impl LedgerExpectation<'_> {
    pub fn return_ok(self, product: Product) {
        self.respond(Ok(product));
    }

    pub fn return_err(self, error: ProductError) {
        self.respond(Err(error));
    }

    fn respond(self, response: Result<Product, ProductError>) {
        self.ledger.expectations.push_back(Expectation {
            kind: self.kind,
            id: self.id,
            quantity: self.quantity,
            response,
        });
    }
}

impl StockLedger for MockStockLedger {
    fn take_stock(&mut self, id: ProductId, quantity: u32) -> Result<Product, ProductError> {
        self.answer(StockMove::Take, id, quantity)
    }

    fn restore_stock(&mut self, id: ProductId, quantity: u32) -> Result<Product, ProductError> {
        self.answer(StockMove::Restore, id, quantity)
    }
}

impl ProductLookup for MockStockLedger {
    fn find_product(&self, id: ProductId) -> Option<Product> {
        self.known.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: 10.0,
            stock: 5,
        }
    }

    #[test]
    fn test_lookup_uses_table() {
        let ledger = MockStockLedger::new().with_product(widget());
        assert_eq!(ledger.find_product(ProductId(1)), Some(widget()));
        assert_eq!(ledger.find_product(ProductId(2)), None);
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met. 1 remaining")]
    fn test_verify_panics_on_leftovers() {
        let mut ledger = MockStockLedger::new();
        ledger.expect_take(ProductId(1), 1).return_ok(widget());
        ledger.verify();
    }

    #[test]
    #[should_panic(expected = "Expected Take of 2 x product_1")]
    fn test_mismatched_call_panics() {
        let mut ledger = MockStockLedger::new();
        ledger.expect_take(ProductId(1), 2).return_ok(widget());
        let _ = ledger.restore_stock(ProductId(1), 2);
    }
}
