//! Document records for inventories.
//!
//! Unlike categories, an inventory keeps the seller's own copy of each product (its stock
//! and price may differ from the catalog's). Loading still drops products the catalog no
//! longer knows.

use crate::model::{Inventory, Product, SellerId};
use crate::records::ProductList;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub seller_id: SellerId,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryXml {
    pub seller_id: SellerId,
    #[serde(default)]
    pub products: ProductList<Product>,
}

impl From<&Inventory> for InventoryRecord {
    fn from(inventory: &Inventory) -> Self {
        Self {
            seller_id: inventory.seller_id,
            products: inventory.products.values().cloned().collect(),
        }
    }
}

impl From<InventoryRecord> for InventoryXml {
    fn from(r: InventoryRecord) -> Self {
        Self {
            seller_id: r.seller_id,
            products: r.products.into(),
        }
    }
}

impl From<InventoryXml> for InventoryRecord {
    fn from(x: InventoryXml) -> Self {
        Self {
            seller_id: x.seller_id,
            products: x.products.items,
        }
    }
}
