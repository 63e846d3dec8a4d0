use crate::model::{Product, ProductId};
use indexmap::IndexMap;

/// Operations on the seller's embedded inventory.
#[derive(Debug, Clone)]
pub enum SellerAction {
    AddProduct(Product),
    RemoveProduct(ProductId),
    UpdateStock { product_id: ProductId, stock: u32 },
    ListInventory,
}

/// Results of [`SellerAction`]; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum SellerActionResult {
    AddProduct(usize),
    RemoveProduct(Product),
    UpdateStock(Product),
    /// Product names keyed by id.
    ListInventory(IndexMap<ProductId, String>),
}
