use crate::model::{Cart, CartLine, ProductId};
use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Reserve `quantity` more units of a product.
    Add { product_id: ProductId, quantity: u32 },
    /// Drop a line and put its units back into stock.
    Remove(ProductId),
    /// Drop every line, restoring stock for each.
    Clear,
    View,
    /// Hand the lines over to an order and empty the cart without restocking.
    Checkout,
}

/// Results of [`CartAction`]; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The line after the add.
    Add(CartLine),
    /// Units returned to stock.
    Remove(u32),
    /// Units returned to stock.
    Clear(u32),
    /// Product name to quantity.
    View(IndexMap<String, u32>),
    /// The cart as it was before it was emptied.
    Checkout(Cart),
}

/// Direction of a cart line change in [`CartManager::update_cart`](crate::managers::CartManager::update_cart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add,
    Remove,
}
