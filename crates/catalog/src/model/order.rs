use crate::model::{Address, CartId, OrderId, PaymentId, Product, ProductId, UserId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One product line in a cart: the product's name and price at the time it was added,
/// plus the reserved quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A user's shopping cart. Every unit in a cart has been taken out of product stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    pub lines: IndexMap<ProductId, CartLine>,
}

impl Cart {
    pub fn new(id: CartId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            lines: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.lines.get(&product_id).map_or(0, |line| line.quantity)
    }

    /// Σ price × quantity over all lines.
    pub fn total(&self) -> f64 {
        self.lines.values().map(CartLine::subtotal).sum()
    }
}

#[derive(Debug, Clone)]
pub struct CartCreate {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Default)]
pub struct CartUpdate {
    pub user_id: Option<UserId>,
}

/// Order lifecycle: `Pending → Placed → {Cancelled, Completed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Placed,
    Cancelled,
    Completed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pending => "Pending",
            Self::Placed => "Placed",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        };
        f.write_str(name)
    }
}

/// Represents a customer order.
///
/// The order owns a snapshot of the cart it was created from and the delivery address.
/// `total_amount` is computed once, at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub cart: Cart,
    pub address: Address,
    pub payment_method: String,
    pub total_amount: f64,
    pub status: OrderStatus,
}

/// Payload for creating a new order from a cart snapshot.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub cart: Cart,
    pub address: Address,
    pub payment_method: String,
}

/// Payload for updating an order. `status` is set directly, bypassing the transition rules
/// enforced by the order actions.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub address: Option<Address>,
    pub payment_method: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Payment lifecycle: `Unpaid → Paid → Refunded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
            Self::Refunded => "Refunded",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "payment_id")]
    pub id: PaymentId,
    pub order_id: OrderId,
    pub amount: f64,
    pub payment_method: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone)]
pub struct PaymentCreate {
    pub order_id: OrderId,
    pub amount: f64,
    pub payment_method: String,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentUpdate {
    pub payment_method: Option<String>,
}
