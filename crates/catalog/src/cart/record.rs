use crate::model::{Cart, CartId, CartLine, UserId};
use crate::records::ProductList;
use serde::{Deserialize, Serialize};

/// A cart with its lines as a list. Each line keeps the name and price it was added at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartRecord {
    pub cart_id: CartId,
    pub user_id: UserId,
    #[serde(default)]
    pub products: Vec<CartLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartXml {
    pub cart_id: CartId,
    pub user_id: UserId,
    #[serde(default)]
    pub products: ProductList<CartLine>,
}

impl From<&Cart> for CartRecord {
    fn from(cart: &Cart) -> Self {
        Self {
            cart_id: cart.id,
            user_id: cart.user_id,
            products: cart.lines.values().cloned().collect(),
        }
    }
}

impl From<CartRecord> for CartXml {
    fn from(r: CartRecord) -> Self {
        Self {
            cart_id: r.cart_id,
            user_id: r.user_id,
            products: r.products.into(),
        }
    }
}

impl From<CartXml> for CartRecord {
    fn from(x: CartXml) -> Self {
        Self {
            cart_id: x.cart_id,
            user_id: x.user_id,
            products: x.products.items,
        }
    }
}
