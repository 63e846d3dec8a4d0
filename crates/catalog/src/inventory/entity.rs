//! Entity trait implementation for the Inventory domain type.
//!
//! The inherent methods below are shared with [`Seller`](crate::model::Seller), which
//! embeds an inventory and forwards its product operations to it.

use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;
use super::record::{InventoryRecord, InventoryXml};
use crate::error::require_amount;
use crate::ledger::ProductLookup;
use crate::model::{Inventory, InventoryCreate, InventoryUpdate, Product, ProductId, SellerId};
use crate::records::retain_known;
use indexmap::IndexMap;
use store_framework::{Persisted, StoreEntity};

impl Inventory {
    /// Returns the number of products after the insert.
    pub fn add_product(&mut self, product: Product) -> Result<usize, InventoryError> {
        if self.products.contains_key(&product.id) {
            return Err(InventoryError::DuplicateProduct(product.id));
        }
        self.products.insert(product.id, product);
        Ok(self.products.len())
    }

    pub fn remove_product(&mut self, product_id: ProductId) -> Result<Product, InventoryError> {
        self.products
            .shift_remove(&product_id)
            .ok_or(InventoryError::ProductNotFound(product_id))
    }

    pub fn update_stock(
        &mut self,
        product_id: ProductId,
        stock: u32,
    ) -> Result<Product, InventoryError> {
        let product = self.product_mut(product_id)?;
        product.stock = stock;
        Ok(product.clone())
    }

    pub fn update_price(
        &mut self,
        product_id: ProductId,
        price: f64,
    ) -> Result<Product, InventoryError> {
        require_amount("price", price).map_err(InventoryError::Validation)?;
        let product = self.product_mut(product_id)?;
        product.price = price;
        Ok(product.clone())
    }

    pub fn get_product(&self, product_id: ProductId) -> Result<Product, InventoryError> {
        self.products
            .get(&product_id)
            .cloned()
            .ok_or(InventoryError::ProductNotFound(product_id))
    }

    /// Product names keyed by id, in insertion order.
    pub fn list_names(&self) -> IndexMap<ProductId, String> {
        self.products
            .iter()
            .map(|(id, product)| (*id, product.name.clone()))
            .collect()
    }

    fn product_mut(&mut self, product_id: ProductId) -> Result<&mut Product, InventoryError> {
        self.products
            .get_mut(&product_id)
            .ok_or(InventoryError::ProductNotFound(product_id))
    }

    fn replace_products(&mut self, products: Vec<Product>) -> Result<(), InventoryError> {
        let mut fresh = Inventory::new(self.seller_id);
        for product in products {
            fresh.add_product(product)?;
        }
        self.products = fresh.products;
        Ok(())
    }
}

impl StoreEntity for Inventory {
    type Id = SellerId;
    type Create = InventoryCreate;
    type Update = InventoryUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = ();
    type Error = InventoryError;

    const NAME: &'static str = "Inventory";

    fn id(&self) -> SellerId {
        self.seller_id
    }

    fn preset_id(params: &InventoryCreate) -> Option<SellerId> {
        Some(params.seller_id)
    }

    fn from_create_params(id: SellerId, params: InventoryCreate) -> Result<Self, InventoryError> {
        let mut inventory = Inventory::new(id);
        inventory.replace_products(params.products)?;
        Ok(inventory)
    }

    fn on_update(&mut self, update: InventoryUpdate, _ctx: &mut ()) -> Result<(), InventoryError> {
        if let Some(products) = update.products {
            self.replace_products(products)?;
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &mut (),
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::AddProduct(product) => self
                .add_product(product)
                .map(InventoryActionResult::AddProduct),
            InventoryAction::RemoveProduct(id) => self
                .remove_product(id)
                .map(InventoryActionResult::RemoveProduct),
            InventoryAction::UpdateStock { product_id, stock } => self
                .update_stock(product_id, stock)
                .map(InventoryActionResult::UpdateStock),
            InventoryAction::UpdatePrice { product_id, price } => self
                .update_price(product_id, price)
                .map(InventoryActionResult::UpdatePrice),
            InventoryAction::GetProduct(id) => {
                self.get_product(id).map(InventoryActionResult::GetProduct)
            }
            InventoryAction::ListProducts => Ok(InventoryActionResult::ListProducts(
                self.products.values().cloned().collect(),
            )),
        }
    }
}

impl Persisted for Inventory {
    const COLLECTION: &'static str = "inventories";
    const ELEMENT: &'static str = "inventory";
    type Record = InventoryRecord;
    type XmlRecord = InventoryXml;
    type Resolver = dyn ProductLookup;

    fn record_id(record: &InventoryRecord) -> SellerId {
        record.seller_id
    }

    fn to_record(&self) -> InventoryRecord {
        InventoryRecord::from(self)
    }

    fn from_record(record: InventoryRecord, products: &dyn ProductLookup) -> Self {
        let kept = retain_known(record.products, products, |p| p.id);
        Self {
            seller_id: record.seller_id,
            products: kept.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}
