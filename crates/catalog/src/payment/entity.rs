//! Entity trait implementation for the Payment domain type.
//!
//! Payments read their order through an [`OrderLookup`] context: at creation to check the
//! amount, and when processing to check that the order has been placed.

use super::actions::PaymentAction;
use super::error::PaymentError;
use crate::error::{require_amount, require_text};
use crate::ledger::OrderLookup;
use crate::model::{
    Order, OrderStatus, Payment, PaymentCreate, PaymentId, PaymentStatus, PaymentUpdate,
};
use store_framework::{Persisted, StoreEntity};

/// Money comparisons tolerate float noise from summing cart lines.
const AMOUNT_EPSILON: f64 = 1e-6;

impl Payment {
    fn order(&self, orders: &dyn OrderLookup) -> Result<Order, PaymentError> {
        orders
            .find_order(self.order_id)
            .ok_or(PaymentError::OrderNotFound(self.order_id))
    }

    fn transition(&mut self, from: PaymentStatus, to: PaymentStatus) -> Result<(), PaymentError> {
        if self.status != from {
            return Err(PaymentError::InvalidStatusTransition {
                id: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

impl StoreEntity for Payment {
    type Id = PaymentId;
    type Create = PaymentCreate;
    type Update = PaymentUpdate;
    type Action = PaymentAction;
    type ActionResult = PaymentStatus;
    type Context = dyn OrderLookup;
    type Error = PaymentError;

    const NAME: &'static str = "Payment";

    fn id(&self) -> PaymentId {
        self.id
    }

    fn from_create_params(id: PaymentId, params: PaymentCreate) -> Result<Self, PaymentError> {
        require_amount("amount", params.amount).map_err(PaymentError::Validation)?;
        require_text("payment_method", &params.payment_method)
            .map_err(PaymentError::Validation)?;
        Ok(Self {
            id,
            order_id: params.order_id,
            amount: params.amount,
            payment_method: params.payment_method,
            status: PaymentStatus::Unpaid,
        })
    }

    /// The order must exist and the amount must equal its total.
    fn on_create(&mut self, orders: &mut Self::Context) -> Result<(), PaymentError> {
        let order = self.order(orders)?;
        if (order.total_amount - self.amount).abs() > AMOUNT_EPSILON {
            return Err(PaymentError::AmountMismatch {
                expected: order.total_amount,
                actual: self.amount,
            });
        }
        Ok(())
    }

    fn on_update(
        &mut self,
        update: PaymentUpdate,
        _orders: &mut Self::Context,
    ) -> Result<(), PaymentError> {
        if let Some(method) = update.payment_method {
            require_text("payment_method", &method).map_err(PaymentError::Validation)?;
            self.payment_method = method;
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: PaymentAction,
        orders: &mut Self::Context,
    ) -> Result<PaymentStatus, PaymentError> {
        match action {
            PaymentAction::Process => {
                let order = self.order(orders)?;
                if order.status != OrderStatus::Placed {
                    return Err(PaymentError::OrderNotPlaced {
                        order_id: order.id,
                        status: order.status,
                    });
                }
                self.transition(PaymentStatus::Unpaid, PaymentStatus::Paid)?;
            }
            PaymentAction::Refund => {
                self.transition(PaymentStatus::Paid, PaymentStatus::Refunded)?
            }
        }
        Ok(self.status)
    }
}

impl Persisted for Payment {
    const COLLECTION: &'static str = "payments";
    const ELEMENT: &'static str = "payment";
    type Record = Payment;
    type XmlRecord = Payment;
    type Resolver = ();

    fn record_id(record: &Payment) -> PaymentId {
        record.id
    }

    fn to_record(&self) -> Payment {
        self.clone()
    }

    fn from_record(record: Payment, _resolver: &()) -> Self {
        record
    }
}
