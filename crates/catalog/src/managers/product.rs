//! # Product Manager
//!
//! Wraps any `EntityStore<Product>` and exposes stock and price operations. It is also the
//! [`StockLedger`] carts and orders move stock through, and the [`ProductLookup`] document
//! resolvers rebuild product references with.

use crate::ledger::{ProductLookup, StockLedger};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product::{ProductAction, ProductActionResult, ProductError};
use store_framework::{EntityStore, Manager, ResourceStore};
use tracing::{debug, instrument};

/// Manager for products, in memory by default.
#[derive(Debug, Default)]
pub struct ProductManager<S = ResourceStore<Product>> {
    store: S,
}

impl ProductManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Product>> Manager<Product> for ProductManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Product>> ProductManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn create_product(&mut self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Creating product");
        self.store.create(params)
    }

    #[instrument(skip(self))]
    pub fn update_product(
        &mut self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.store.update(id, update)
    }

    /// Relative stock move. Returns the new stock level.
    #[instrument(skip(self))]
    pub fn update_stock(&mut self, id: ProductId, delta: i64) -> Result<u32, ProductError> {
        debug!("Updating stock for {} by {}", id, delta);
        match self
            .store
            .perform_action(id, ProductAction::UpdateStock(delta))?
        {
            ProductActionResult::UpdateStock(stock) => Ok(stock),
            _ => unreachable!("UpdateStock action must return UpdateStock result"),
        }
    }

    #[instrument(skip(self))]
    pub fn update_price(&mut self, id: ProductId, price: f64) -> Result<f64, ProductError> {
        match self
            .store
            .perform_action(id, ProductAction::UpdatePrice(price))?
        {
            ProductActionResult::UpdatePrice(price) => Ok(price),
            _ => unreachable!("UpdatePrice action must return UpdatePrice result"),
        }
    }

    /// Whether at least one unit is in stock.
    #[instrument(skip(self))]
    pub fn check_availability(&mut self, id: ProductId) -> Result<bool, ProductError> {
        match self
            .store
            .perform_action(id, ProductAction::CheckAvailability)?
        {
            ProductActionResult::CheckAvailability(available) => Ok(available),
            _ => unreachable!("CheckAvailability action must return CheckAvailability result"),
        }
    }

    #[instrument(skip(self))]
    pub fn check_stock(&mut self, id: ProductId) -> Result<u32, ProductError> {
        match self.store.perform_action(id, ProductAction::CheckStock)? {
            ProductActionResult::CheckStock(stock) => Ok(stock),
            _ => unreachable!("CheckStock action must return CheckStock result"),
        }
    }
}

impl<S: EntityStore<Product>> StockLedger for ProductManager<S> {
    fn take_stock(&mut self, id: ProductId, quantity: u32) -> Result<Product, ProductError> {
        self.update_stock(id, -i64::from(quantity))?;
        self.read(id)
    }

    fn restore_stock(&mut self, id: ProductId, quantity: u32) -> Result<Product, ProductError> {
        self.update_stock(id, i64::from(quantity))?;
        self.read(id)
    }
}

impl<S: EntityStore<Product>> ProductLookup for ProductManager<S> {
    fn find_product(&self, id: ProductId) -> Option<Product> {
        self.store.read(id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_framework::mock::MockStore;
    use store_framework::StorageError;

    fn widget(stock: u32) -> Product {
        Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: 10.0,
            stock,
        }
    }

    #[test]
    fn test_take_stock_returns_updated_product() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::UpdateStock(2));
        mock.expect_read(ProductId(1)).return_ok(widget(2));
        let mut products = ProductManager::with_store(mock);

        assert_eq!(products.take_stock(ProductId(1), 3).unwrap().stock, 2);
        products.store().verify();
    }

    #[test]
    fn test_storage_failure_surfaces_unchanged() {
        let failure = ProductError::Storage(StorageError::Write {
            path: "products.json".to_string(),
            message: "disk full".to_string(),
        });
        let mut mock = MockStore::<Product>::new();
        mock.expect_action(ProductId(1)).return_err(failure.clone());
        let mut products = ProductManager::with_store(mock);

        assert_eq!(products.update_price(ProductId(1), 3.0), Err(failure));
    }

    #[test]
    fn test_lookup_hides_missing_products() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_read(ProductId(5))
            .return_err(ProductError::NotFound(ProductId(5)));
        let products = ProductManager::with_store(mock);
        assert_eq!(products.find_product(ProductId(5)), None);
    }

    #[test]
    fn test_in_memory_stock_round_trip() {
        let mut products = ProductManager::new();
        let widget = products
            .create_product(ProductCreate::new("Widget", "Tools", 10.0, 5))
            .unwrap();
        products.take_stock(widget.id, 5).unwrap();
        assert!(!products.check_availability(widget.id).unwrap());
        assert!(products.take_stock(widget.id, 1).is_err());
        products.restore_stock(widget.id, 2).unwrap();
        assert_eq!(products.check_stock(widget.id), Ok(2));
    }
}
