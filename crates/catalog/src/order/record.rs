//! Document records for orders. The order's cart snapshot and address are flattened into
//! the order itself, so an order document does not depend on any other document.

use crate::model::{Address, Cart, CartId, CartLine, Order, OrderId, OrderStatus, UserId};
use crate::records::ProductList;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub cart_id: CartId,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_method: String,
    pub address: Address,
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderXml {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub cart_id: CartId,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_method: String,
    pub address: Address,
    #[serde(default)]
    pub cart: ProductList<CartLine>,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            user_id: order.user_id,
            cart_id: order.cart.id,
            total_amount: order.total_amount,
            status: order.status,
            payment_method: order.payment_method.clone(),
            address: order.address.clone(),
            cart: order.cart.lines.values().cloned().collect(),
        }
    }
}

impl From<OrderRecord> for Order {
    fn from(r: OrderRecord) -> Self {
        Self {
            id: r.order_id,
            user_id: r.user_id,
            cart: Cart {
                id: r.cart_id,
                user_id: r.user_id,
                lines: r.cart.into_iter().map(|l| (l.product_id, l)).collect(),
            },
            address: r.address,
            payment_method: r.payment_method,
            total_amount: r.total_amount,
            status: r.status,
        }
    }
}

impl From<OrderRecord> for OrderXml {
    fn from(r: OrderRecord) -> Self {
        Self {
            order_id: r.order_id,
            user_id: r.user_id,
            cart_id: r.cart_id,
            total_amount: r.total_amount,
            status: r.status,
            payment_method: r.payment_method,
            address: r.address,
            cart: r.cart.into(),
        }
    }
}

impl From<OrderXml> for OrderRecord {
    fn from(x: OrderXml) -> Self {
        Self {
            order_id: x.order_id,
            user_id: x.user_id,
            cart_id: x.cart_id,
            total_amount: x.total_amount,
            status: x.status,
            payment_method: x.payment_method,
            address: x.address,
            cart: x.cart.items,
        }
    }
}
