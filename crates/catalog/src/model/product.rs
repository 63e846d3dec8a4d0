use crate::model::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// Represents a product in the catalog.
///
/// # Store Framework
/// Implements [`StoreEntity`](store_framework::StoreEntity), allowing it to be kept in a
/// [`ResourceStore`](store_framework::ResourceStore) or a
/// [`DocumentStore`](store_framework::DocumentStore).
///
/// See [`product::entity`](crate::product::entity) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::product::ProductAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product_id")]
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

/// DTO for Product creation.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            stock,
        }
    }
}

/// DTO for Product updates. Stock is absolute here; relative moves use
/// [`ProductAction::UpdateStock`](crate::product::ProductAction::UpdateStock).
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
}

/// A named group of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub products: Vec<Product>,
}

impl Category {
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == product_id)
    }
}

#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}
