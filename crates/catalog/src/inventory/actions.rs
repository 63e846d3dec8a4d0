use crate::model::{Product, ProductId};

#[derive(Debug, Clone)]
pub enum InventoryAction {
    AddProduct(Product),
    RemoveProduct(ProductId),
    /// Absolute stock level for one product.
    UpdateStock { product_id: ProductId, stock: u32 },
    UpdatePrice { product_id: ProductId, price: f64 },
    GetProduct(ProductId),
    ListProducts,
}

/// Results of [`InventoryAction`]; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    AddProduct(usize),
    RemoveProduct(Product),
    UpdateStock(Product),
    UpdatePrice(Product),
    GetProduct(Product),
    ListProducts(Vec<Product>),
}
