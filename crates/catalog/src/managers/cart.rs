//! # Cart Manager
//!
//! Every operation that moves stock takes the [`StockLedger`] the units come from or go
//! back to, usually the [`ProductManager`](super::ProductManager) of the same catalog.

use crate::cart::{CartAction, CartActionResult, CartError, CartOp};
use crate::ledger::{Detached, StockLedger};
use crate::model::{Cart, CartCreate, CartId, CartLine, ProductId, UserId};
use indexmap::IndexMap;
use store_framework::{EntityStore, Manager, ResourceStore};
use tracing::{debug, instrument};

/// Manager for carts, in memory by default.
#[derive(Debug, Default)]
pub struct CartManager<S = ResourceStore<Cart>> {
    store: S,
}

impl CartManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Cart>> Manager<Cart> for CartManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Cart>> CartManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Creates an empty cart. Empty carts touch no stock, so no ledger is needed.
    #[instrument(skip(self))]
    pub fn create_cart(&mut self, user_id: UserId) -> Result<Cart, CartError> {
        debug!("Creating cart");
        self.store.create_with(CartCreate { user_id }, &mut Detached)
    }

    /// The user's first cart.
    #[instrument(skip(self))]
    pub fn get_cart_by_user(&self, user_id: UserId) -> Result<Cart, CartError> {
        self.store
            .find_where(|cart: &Cart| cart.user_id == user_id)?
            .into_iter()
            .next()
            .ok_or(CartError::NoCartForUser(user_id))
    }

    fn act(
        &mut self,
        id: CartId,
        action: CartAction,
        ledger: &mut (dyn StockLedger + 'static),
    ) -> Result<CartActionResult, CartError> {
        self.store.perform_action_with(id, action, ledger)
    }

    #[instrument(skip(self, ledger))]
    pub fn add_to_cart(
        &mut self,
        id: CartId,
        product_id: ProductId,
        quantity: u32,
        ledger: &mut (dyn StockLedger + 'static),
    ) -> Result<CartLine, CartError> {
        debug!("Adding {} x {} to cart", quantity, product_id);
        match self.act(
            id,
            CartAction::Add {
                product_id,
                quantity,
            },
            ledger,
        )? {
            CartActionResult::Add(line) => Ok(line),
            _ => unreachable!("Add action must return Add result"),
        }
    }

    /// Removes the whole line. Returns the units restored.
    #[instrument(skip(self, ledger))]
    pub fn remove_from_cart(
        &mut self,
        id: CartId,
        product_id: ProductId,
        ledger: &mut (dyn StockLedger + 'static),
    ) -> Result<u32, CartError> {
        match self.act(id, CartAction::Remove(product_id), ledger)? {
            CartActionResult::Remove(restored) => Ok(restored),
            _ => unreachable!("Remove action must return Remove result"),
        }
    }

    /// Adds `quantity` units or removes the product's whole line, then returns the cart.
    /// `quantity` is ignored for [`CartOp::Remove`].
    #[instrument(skip(self, ledger))]
    pub fn update_cart(
        &mut self,
        id: CartId,
        product_id: ProductId,
        quantity: u32,
        op: CartOp,
        ledger: &mut (dyn StockLedger + 'static),
    ) -> Result<Cart, CartError> {
        match op {
            CartOp::Add => {
                self.add_to_cart(id, product_id, quantity, ledger)?;
            }
            CartOp::Remove => {
                self.remove_from_cart(id, product_id, ledger)?;
            }
        }
        self.store.read(id)
    }

    /// Restores stock for every line and empties the cart. Returns the units restored.
    #[instrument(skip(self, ledger))]
    pub fn clear_cart(
        &mut self,
        id: CartId,
        ledger: &mut (dyn StockLedger + 'static),
    ) -> Result<u32, CartError> {
        match self.act(id, CartAction::Clear, ledger)? {
            CartActionResult::Clear(restored) => Ok(restored),
            _ => unreachable!("Clear action must return Clear result"),
        }
    }

    /// Product name to quantity.
    #[instrument(skip(self))]
    pub fn view_cart(&self, id: CartId) -> Result<IndexMap<String, u32>, CartError> {
        Ok(self.store.read(id)?.view())
    }

    /// Empties the cart without restocking and returns its previous contents.
    #[instrument(skip(self))]
    pub fn checkout(&mut self, id: CartId) -> Result<Cart, CartError> {
        match self.act(id, CartAction::Checkout, &mut Detached)? {
            CartActionResult::Checkout(snapshot) => Ok(snapshot),
            _ => unreachable!("Checkout action must return Checkout result"),
        }
    }

    /// Deletes the cart, giving back any units it still holds.
    #[instrument(skip(self, ledger))]
    pub fn delete_cart(
        &mut self,
        id: CartId,
        ledger: &mut (dyn StockLedger + 'static),
    ) -> Result<(), CartError> {
        self.store.delete_with(id, ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::ProductManager;
    use crate::model::ProductCreate;

    fn setup() -> (ProductManager, CartManager, ProductId, CartId) {
        let mut products = ProductManager::new();
        let widget = products
            .create_product(ProductCreate::new("Widget", "Tools", 10.0, 5))
            .unwrap();
        let mut carts = CartManager::new();
        let cart = carts.create_cart(UserId(1)).unwrap();
        (products, carts, widget.id, cart.id)
    }

    #[test]
    fn test_update_cart_add_then_remove() {
        let (mut products, mut carts, widget, cart) = setup();

        let filled = carts
            .update_cart(cart, widget, 3, CartOp::Add, &mut products)
            .unwrap();
        assert_eq!(filled.quantity_of(widget), 3);
        assert_eq!(products.check_stock(widget), Ok(2));

        let emptied = carts
            .update_cart(cart, widget, 0, CartOp::Remove, &mut products)
            .unwrap();
        assert!(emptied.is_empty());
        assert_eq!(products.check_stock(widget), Ok(5));
    }

    #[test]
    fn test_failed_add_changes_nothing() {
        let (mut products, mut carts, widget, cart) = setup();
        let err = carts.add_to_cart(cart, widget, 6, &mut products).unwrap_err();
        assert!(matches!(err, CartError::Stock(_)));
        assert_eq!(products.check_stock(widget), Ok(5));
        assert!(carts.read(cart).unwrap().is_empty());
    }

    #[test]
    fn test_get_cart_by_user() {
        let (_, carts, _, cart) = setup();
        assert_eq!(carts.get_cart_by_user(UserId(1)).unwrap().id, cart);
        assert_eq!(
            carts.get_cart_by_user(UserId(2)),
            Err(CartError::NoCartForUser(UserId(2)))
        );
    }

    #[test]
    fn test_delete_restores_held_units() {
        let (mut products, mut carts, widget, cart) = setup();
        carts.add_to_cart(cart, widget, 4, &mut products).unwrap();
        carts.delete_cart(cart, &mut products).unwrap();
        assert_eq!(products.check_stock(widget), Ok(5));
        assert_eq!(carts.read(cart), Err(CartError::NotFound(cart)));
    }

    #[test]
    fn test_checkout_keeps_stock_reserved() {
        let (mut products, mut carts, widget, cart) = setup();
        carts.add_to_cart(cart, widget, 2, &mut products).unwrap();
        let snapshot = carts.checkout(cart).unwrap();
        assert_eq!(snapshot.total(), 20.0);
        assert!(carts.view_cart(cart).unwrap().is_empty());
        assert_eq!(products.check_stock(widget), Ok(3));
    }
}
