use crate::model::{Product, ProductId, SellerId};
use indexmap::IndexMap;

/// The products a seller offers, keyed by product id.
///
/// Keyed by the owning seller's id rather than by a sequence of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub seller_id: SellerId,
    pub products: IndexMap<ProductId, Product>,
}

impl Inventory {
    pub fn new(seller_id: SellerId) -> Self {
        Self {
            seller_id,
            products: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InventoryCreate {
    pub seller_id: SellerId,
    pub products: Vec<Product>,
}

/// Replaces the whole product set when `products` is given.
#[derive(Debug, Clone, Default)]
pub struct InventoryUpdate {
    pub products: Option<Vec<Product>>,
}

/// A merchant owning exactly one inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub inventory: Inventory,
}

#[derive(Debug, Clone)]
pub struct SellerCreate {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct SellerUpdate {
    pub name: Option<String>,
}
