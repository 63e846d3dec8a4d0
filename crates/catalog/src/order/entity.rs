//! Entity trait implementation for the Order domain type.
//!
//! # State Machine
//!
//! ```text
//! Pending --Place--> Placed --Cancel--> Cancelled
//!                           \--Complete--> Completed
//! ```
//!
//! Actions enforce the arrows above. A direct `status` patch through `on_update` does not.

use super::actions::OrderAction;
use super::error::OrderError;
use super::record::{OrderRecord, OrderXml};
use crate::error::require_text;
use crate::ledger::StockLedger;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use store_framework::{Persisted, StoreEntity};

impl Order {
    /// Moves to `to` if the order is currently in `from`.
    fn transition(&mut self, from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        if self.status != from {
            return Err(OrderError::InvalidStatusTransition {
                id: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

impl StoreEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = dyn StockLedger;
    type Error = OrderError;

    const NAME: &'static str = "Order";

    fn id(&self) -> OrderId {
        self.id
    }

    /// The total is fixed here from the cart snapshot and never recomputed.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        require_text("payment_method", &params.payment_method).map_err(OrderError::Validation)?;
        let total_amount = params.cart.total();
        if !(total_amount.is_finite() && total_amount > 0.0) {
            return Err(OrderError::Validation(format!(
                "total_amount must be positive, got {total_amount}"
            )));
        }
        Ok(Self {
            id,
            user_id: params.cart.user_id,
            cart: params.cart,
            address: params.address,
            payment_method: params.payment_method,
            total_amount,
            status: OrderStatus::Pending,
        })
    }

    fn on_update(
        &mut self,
        update: OrderUpdate,
        _ledger: &mut Self::Context,
    ) -> Result<(), OrderError> {
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(method) = update.payment_method {
            require_text("payment_method", &method).map_err(OrderError::Validation)?;
            self.payment_method = method;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: OrderAction,
        ledger: &mut Self::Context,
    ) -> Result<OrderStatus, OrderError> {
        match action {
            OrderAction::Place => self.transition(OrderStatus::Pending, OrderStatus::Placed)?,
            OrderAction::Cancel => {
                self.transition(OrderStatus::Placed, OrderStatus::Cancelled)?;
                self.cart.clear(ledger)?;
            }
            OrderAction::Complete => {
                self.transition(OrderStatus::Placed, OrderStatus::Completed)?
            }
        }
        Ok(self.status)
    }
}

impl Persisted for Order {
    const COLLECTION: &'static str = "orders";
    const ELEMENT: &'static str = "order";
    type Record = OrderRecord;
    type XmlRecord = OrderXml;
    type Resolver = ();

    fn record_id(record: &OrderRecord) -> OrderId {
        record.order_id
    }

    fn to_record(&self) -> OrderRecord {
        OrderRecord::from(self)
    }

    fn from_record(record: OrderRecord, _resolver: &()) -> Self {
        Order::from(record)
    }
}
