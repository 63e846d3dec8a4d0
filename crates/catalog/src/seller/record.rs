use crate::model::{Product, Seller, SellerId};
use crate::records::ProductList;
use serde::{Deserialize, Serialize};

/// A seller with its inventory flattened to a product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerRecord {
    pub seller_id: SellerId,
    pub name: String,
    #[serde(default)]
    pub inventory: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerXml {
    pub seller_id: SellerId,
    pub name: String,
    #[serde(default)]
    pub inventory: ProductList<Product>,
}

impl From<&Seller> for SellerRecord {
    fn from(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id,
            name: seller.name.clone(),
            inventory: seller.inventory.products.values().cloned().collect(),
        }
    }
}

impl From<SellerRecord> for SellerXml {
    fn from(r: SellerRecord) -> Self {
        Self {
            seller_id: r.seller_id,
            name: r.name,
            inventory: r.inventory.into(),
        }
    }
}

impl From<SellerXml> for SellerRecord {
    fn from(x: SellerXml) -> Self {
        Self {
            seller_id: x.seller_id,
            name: x.name,
            inventory: x.inventory.items,
        }
    }
}
