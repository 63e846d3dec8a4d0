//! Entity trait implementation for the Category domain type.

use super::actions::{CategoryAction, CategoryActionResult};
use super::error::CategoryError;
use super::record::{CategoryRecord, CategoryXml};
use crate::error::require_text;
use crate::ledger::ProductLookup;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate, Product, ProductId};
use crate::records::resolve_refs;
use store_framework::{Persisted, StoreEntity};

impl Category {
    /// Adds a product, refusing one that is already a member. Returns the new member count.
    pub fn add_product(&mut self, product: Product) -> Result<usize, CategoryError> {
        if self.contains(product.id) {
            return Err(CategoryError::DuplicateProduct(product.id));
        }
        self.products.push(product);
        Ok(self.products.len())
    }

    pub fn remove_product(&mut self, product_id: ProductId) -> Result<Product, CategoryError> {
        let idx = self
            .products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or(CategoryError::ProductNotInCategory(product_id))?;
        Ok(self.products.remove(idx))
    }
}

impl StoreEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = CategoryAction;
    type ActionResult = CategoryActionResult;
    type Context = ();
    type Error = CategoryError;

    const NAME: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        require_text("name", &params.name).map_err(CategoryError::Validation)?;
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            products: Vec::new(),
        })
    }

    fn on_update(&mut self, update: CategoryUpdate, _ctx: &mut ()) -> Result<(), CategoryError> {
        if let Some(name) = update.name {
            require_text("name", &name).map_err(CategoryError::Validation)?;
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: CategoryAction,
        _ctx: &mut (),
    ) -> Result<CategoryActionResult, CategoryError> {
        match action {
            CategoryAction::AddProduct(product) => {
                self.add_product(product).map(CategoryActionResult::AddProduct)
            }
            CategoryAction::RemoveProduct(id) => {
                self.remove_product(id).map(CategoryActionResult::RemoveProduct)
            }
            CategoryAction::ListProducts => {
                Ok(CategoryActionResult::ListProducts(self.products.clone()))
            }
        }
    }
}

impl Persisted for Category {
    const COLLECTION: &'static str = "categories";
    const ELEMENT: &'static str = "category";
    type Record = CategoryRecord;
    type XmlRecord = CategoryXml;
    type Resolver = dyn ProductLookup;

    fn record_id(record: &CategoryRecord) -> CategoryId {
        record.category_id
    }

    fn to_record(&self) -> CategoryRecord {
        CategoryRecord::from(self)
    }

    fn from_record(record: CategoryRecord, products: &dyn ProductLookup) -> Self {
        Self {
            id: record.category_id,
            name: record.name,
            description: record.description,
            products: resolve_refs(record.products, products),
        }
    }
}
