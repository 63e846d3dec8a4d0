//! # Order & Payment Managers
//!
//! `OrderManager` drives the order state machine and answers [`OrderLookup`] for payments.
//! `PaymentManager` checks every payment against its order through that lookup.

use crate::ledger::{Detached, OrderLookup, StockLedger};
use crate::model::{
    Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, Payment, PaymentCreate, PaymentId,
    PaymentStatus, PaymentUpdate, UserId,
};
use crate::order::{OrderAction, OrderError};
use crate::payment::{PaymentAction, PaymentError};
use store_framework::{EntityStore, Manager, ResourceStore};
use tracing::{debug, instrument};

/// Manager for orders, in memory by default.
#[derive(Debug, Default)]
pub struct OrderManager<S = ResourceStore<Order>> {
    store: S,
}

impl OrderManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Order>> Manager<Order> for OrderManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Order>> OrderManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Creates a `Pending` order from a cart snapshot. The snapshot's units are expected to
    /// be reserved already; see [`CartManager::checkout`](super::CartManager::checkout).
    #[instrument(skip(self, params), fields(cart_id = %params.cart.id))]
    pub fn create_order(&mut self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "Creating order");
        self.store.create_with(params, &mut Detached)
    }

    /// Patches address, payment method or status. A status set here skips the transition
    /// checks of [`place_order`](Self::place_order) and friends.
    #[instrument(skip(self))]
    pub fn update_order(&mut self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        self.store.update_with(id, update, &mut Detached)
    }

    /// Removes the order record. Reserved units are not restocked; cancel first for that.
    #[instrument(skip(self))]
    pub fn delete_order(&mut self, id: OrderId) -> Result<(), OrderError> {
        self.store.delete_with(id, &mut Detached)
    }

    #[instrument(skip(self))]
    pub fn place_order(&mut self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.store
            .perform_action_with(id, OrderAction::Place, &mut Detached)
    }

    /// Cancels a placed order and returns its units to stock.
    #[instrument(skip(self, ledger))]
    pub fn cancel_order(
        &mut self,
        id: OrderId,
        ledger: &mut (dyn StockLedger + 'static),
    ) -> Result<OrderStatus, OrderError> {
        self.store.perform_action_with(id, OrderAction::Cancel, ledger)
    }

    #[instrument(skip(self))]
    pub fn complete_order(&mut self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.store
            .perform_action_with(id, OrderAction::Complete, &mut Detached)
    }

    /// All orders of a user. A user without orders is reported as an error.
    #[instrument(skip(self))]
    pub fn get_orders_by_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.store.find_where(|o: &Order| o.user_id == user_id)?;
        if orders.is_empty() {
            return Err(OrderError::NoOrdersForUser(user_id));
        }
        Ok(orders)
    }
}

impl<S: EntityStore<Order>> OrderLookup for OrderManager<S> {
    fn find_order(&self, id: OrderId) -> Option<Order> {
        self.store.read(id).ok()
    }
}

/// Manager for payments, in memory by default.
#[derive(Debug, Default)]
pub struct PaymentManager<S = ResourceStore<Payment>> {
    store: S,
}

impl PaymentManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Payment>> Manager<Payment> for PaymentManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Payment>> PaymentManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Creates an `Unpaid` payment for exactly the order's total.
    #[instrument(skip(self, orders))]
    pub fn create_payment(
        &mut self,
        params: PaymentCreate,
        orders: &mut (dyn OrderLookup + 'static),
    ) -> Result<Payment, PaymentError> {
        self.store.create_with(params, orders)
    }

    #[instrument(skip(self))]
    pub fn update_payment(
        &mut self,
        id: PaymentId,
        update: PaymentUpdate,
    ) -> Result<Payment, PaymentError> {
        self.store.update_with(id, update, &mut Detached)
    }

    #[instrument(skip(self))]
    pub fn delete_payment(&mut self, id: PaymentId) -> Result<(), PaymentError> {
        self.store.delete_with(id, &mut Detached)
    }

    #[instrument(skip(self, orders))]
    pub fn process_payment(
        &mut self,
        id: PaymentId,
        orders: &mut (dyn OrderLookup + 'static),
    ) -> Result<PaymentStatus, PaymentError> {
        self.store
            .perform_action_with(id, PaymentAction::Process, orders)
    }

    #[instrument(skip(self))]
    pub fn refund_payment(&mut self, id: PaymentId) -> Result<PaymentStatus, PaymentError> {
        self.store
            .perform_action_with(id, PaymentAction::Refund, &mut Detached)
    }

    #[instrument(skip(self))]
    pub fn get_payments_by_order(&self, order_id: OrderId) -> Result<Vec<Payment>, PaymentError> {
        self.store.find_where(|p: &Payment| p.order_id == order_id)
    }
}
