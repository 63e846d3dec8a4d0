use crate::model::{Product, ProductId};

/// Membership changes on a category.
#[derive(Debug, Clone)]
pub enum CategoryAction {
    AddProduct(Product),
    RemoveProduct(ProductId),
    ListProducts,
}

/// Results of [`CategoryAction`]; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryActionResult {
    AddProduct(usize),
    RemoveProduct(Product),
    ListProducts(Vec<Product>),
}
