use crate::category::{CategoryAction, CategoryActionResult, CategoryError};
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate, Product, ProductId};
use store_framework::{EntityStore, Manager, ResourceStore};
use tracing::instrument;

/// Manager for categories, in memory by default.
#[derive(Debug, Default)]
pub struct CategoryManager<S = ResourceStore<Category>> {
    store: S,
}

impl CategoryManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Category>> Manager<Category> for CategoryManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Category>> CategoryManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn create_category(&mut self, params: CategoryCreate) -> Result<Category, CategoryError> {
        self.store.create(params)
    }

    #[instrument(skip(self))]
    pub fn update_category(
        &mut self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, CategoryError> {
        self.store.update(id, update)
    }

    /// Returns the member count after the add.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_product(&mut self, id: CategoryId, product: Product) -> Result<usize, CategoryError> {
        match self
            .store
            .perform_action(id, CategoryAction::AddProduct(product))?
        {
            CategoryActionResult::AddProduct(count) => Ok(count),
            _ => unreachable!("AddProduct action must return AddProduct result"),
        }
    }

    #[instrument(skip(self))]
    pub fn remove_product(
        &mut self,
        id: CategoryId,
        product_id: ProductId,
    ) -> Result<Product, CategoryError> {
        match self
            .store
            .perform_action(id, CategoryAction::RemoveProduct(product_id))?
        {
            CategoryActionResult::RemoveProduct(product) => Ok(product),
            _ => unreachable!("RemoveProduct action must return RemoveProduct result"),
        }
    }

    #[instrument(skip(self))]
    pub fn list_products(&self, id: CategoryId) -> Result<Vec<Product>, CategoryError> {
        Ok(self.store.read(id)?.products)
    }

    /// Categories the product belongs to.
    #[instrument(skip(self))]
    pub fn categories_of(&self, product_id: ProductId) -> Result<Vec<Category>, CategoryError> {
        self.store.find_where(|c: &Category| c.contains(product_id))
    }
}
