//! Managers for sellers and stand-alone inventories.

use crate::inventory::{InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{
    Inventory, InventoryCreate, InventoryUpdate, Product, ProductId, Seller, SellerCreate,
    SellerId, SellerUpdate,
};
use crate::seller::{SellerAction, SellerActionResult, SellerError};
use indexmap::IndexMap;
use store_framework::{EntityStore, Manager, ResourceStore};
use tracing::instrument;

/// Manager for inventories, in memory by default. Inventories are keyed by seller id.
#[derive(Debug, Default)]
pub struct InventoryManager<S = ResourceStore<Inventory>> {
    store: S,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Inventory>> Manager<Inventory> for InventoryManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Inventory>> InventoryManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn create_inventory(&mut self, params: InventoryCreate) -> Result<Inventory, InventoryError> {
        self.store.create(params)
    }

    /// Replaces the whole product set.
    #[instrument(skip(self))]
    pub fn update_inventory(
        &mut self,
        seller_id: SellerId,
        update: InventoryUpdate,
    ) -> Result<Inventory, InventoryError> {
        self.store.update(seller_id, update)
    }

    fn act(
        &mut self,
        seller_id: SellerId,
        action: InventoryAction,
    ) -> Result<InventoryActionResult, InventoryError> {
        self.store.perform_action(seller_id, action)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_product(
        &mut self,
        seller_id: SellerId,
        product: Product,
    ) -> Result<usize, InventoryError> {
        match self.act(seller_id, InventoryAction::AddProduct(product))? {
            InventoryActionResult::AddProduct(count) => Ok(count),
            _ => unreachable!("AddProduct action must return AddProduct result"),
        }
    }

    #[instrument(skip(self))]
    pub fn remove_product(
        &mut self,
        seller_id: SellerId,
        product_id: ProductId,
    ) -> Result<Product, InventoryError> {
        match self.act(seller_id, InventoryAction::RemoveProduct(product_id))? {
            InventoryActionResult::RemoveProduct(product) => Ok(product),
            _ => unreachable!("RemoveProduct action must return RemoveProduct result"),
        }
    }

    /// Sets an absolute stock level on the seller's copy of the product.
    #[instrument(skip(self))]
    pub fn update_stock(
        &mut self,
        seller_id: SellerId,
        product_id: ProductId,
        stock: u32,
    ) -> Result<Product, InventoryError> {
        match self.act(seller_id, InventoryAction::UpdateStock { product_id, stock })? {
            InventoryActionResult::UpdateStock(product) => Ok(product),
            _ => unreachable!("UpdateStock action must return UpdateStock result"),
        }
    }

    #[instrument(skip(self))]
    pub fn update_price(
        &mut self,
        seller_id: SellerId,
        product_id: ProductId,
        price: f64,
    ) -> Result<Product, InventoryError> {
        match self.act(seller_id, InventoryAction::UpdatePrice { product_id, price })? {
            InventoryActionResult::UpdatePrice(product) => Ok(product),
            _ => unreachable!("UpdatePrice action must return UpdatePrice result"),
        }
    }

    #[instrument(skip(self))]
    pub fn get_product(
        &self,
        seller_id: SellerId,
        product_id: ProductId,
    ) -> Result<Product, InventoryError> {
        self.store.read(seller_id)?.get_product(product_id)
    }

    #[instrument(skip(self))]
    pub fn list_inventory(&self, seller_id: SellerId) -> Result<Vec<Product>, InventoryError> {
        Ok(self
            .store
            .read(seller_id)?
            .products
            .into_values()
            .collect())
    }
}

/// Manager for sellers, in memory by default.
#[derive(Debug, Default)]
pub struct SellerManager<S = ResourceStore<Seller>> {
    store: S,
}

impl SellerManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Seller>> Manager<Seller> for SellerManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Seller>> SellerManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn create_seller(&mut self, params: SellerCreate) -> Result<Seller, SellerError> {
        self.store.create(params)
    }

    #[instrument(skip(self))]
    pub fn update_seller(
        &mut self,
        id: SellerId,
        update: SellerUpdate,
    ) -> Result<Seller, SellerError> {
        self.store.update(id, update)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_product(&mut self, id: SellerId, product: Product) -> Result<usize, SellerError> {
        match self
            .store
            .perform_action(id, SellerAction::AddProduct(product))?
        {
            SellerActionResult::AddProduct(count) => Ok(count),
            _ => unreachable!("AddProduct action must return AddProduct result"),
        }
    }

    #[instrument(skip(self))]
    pub fn remove_product(
        &mut self,
        id: SellerId,
        product_id: ProductId,
    ) -> Result<Product, SellerError> {
        match self
            .store
            .perform_action(id, SellerAction::RemoveProduct(product_id))?
        {
            SellerActionResult::RemoveProduct(product) => Ok(product),
            _ => unreachable!("RemoveProduct action must return RemoveProduct result"),
        }
    }

    #[instrument(skip(self))]
    pub fn update_stock(
        &mut self,
        id: SellerId,
        product_id: ProductId,
        stock: u32,
    ) -> Result<Product, SellerError> {
        match self
            .store
            .perform_action(id, SellerAction::UpdateStock { product_id, stock })?
        {
            SellerActionResult::UpdateStock(product) => Ok(product),
            _ => unreachable!("UpdateStock action must return UpdateStock result"),
        }
    }

    /// Product names keyed by id.
    #[instrument(skip(self))]
    pub fn list_inventory(&self, id: SellerId) -> Result<IndexMap<ProductId, String>, SellerError> {
        Ok(self.store.read(id)?.inventory.list_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product {
            id: ProductId(3),
            name: "Lamp".to_string(),
            category: "Home".to_string(),
            price: 18.0,
            stock: 6,
        }
    }

    #[test]
    fn test_inventory_operations() {
        let mut inventories = InventoryManager::new();
        inventories
            .create_inventory(InventoryCreate {
                seller_id: SellerId(1),
                products: Vec::new(),
            })
            .unwrap();
        inventories.add_product(SellerId(1), lamp()).unwrap();
        inventories.update_price(SellerId(1), ProductId(3), 15.0).unwrap();

        let stored = inventories.get_product(SellerId(1), ProductId(3)).unwrap();
        assert_eq!(stored.price, 15.0);
        assert_eq!(
            inventories.get_product(SellerId(2), ProductId(3)),
            Err(InventoryError::NotFound(SellerId(2)))
        );
    }

    #[test]
    fn test_seller_forwards_to_inventory() {
        let mut sellers = SellerManager::new();
        let shop = sellers
            .create_seller(SellerCreate {
                name: "Lights & Co".to_string(),
            })
            .unwrap();
        sellers.add_product(shop.id, lamp()).unwrap();
        sellers.update_stock(shop.id, ProductId(3), 1).unwrap();

        assert_eq!(
            sellers.read(shop.id).unwrap().inventory.products[&ProductId(3)].stock,
            1
        );
        assert_eq!(
            sellers.remove_product(shop.id, ProductId(4)),
            Err(SellerError::Inventory(InventoryError::ProductNotFound(
                ProductId(4)
            )))
        );
        assert_eq!(sellers.list_inventory(shop.id).unwrap().len(), 1);
    }
}
