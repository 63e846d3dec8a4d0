//! Entity trait implementation for the Cart domain type.
//!
//! Every unit in a cart has been taken out of product stock through a
//! [`StockLedger`]. Removing a line, clearing the cart or deleting it gives the units back,
//! so stock plus cart quantities stay constant. Checkout is the one exit that does not
//! restock: the units move on to the order.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use super::record::{CartRecord, CartXml};
use crate::ledger::{ProductLookup, StockLedger};
use crate::model::{Cart, CartCreate, CartId, CartLine, CartUpdate, ProductId};
use crate::product::ProductError;
use crate::records::retain_known;
use indexmap::IndexMap;
use store_framework::{Persisted, StoreEntity};
use tracing::warn;

/// Returns the lines' units to stock, all or nothing. A product that no longer exists has
/// nowhere to go back to, so its line is skipped. Any other failure takes the lines already
/// put back out of stock again before the error is returned.
fn put_back<'a>(
    ledger: &mut dyn StockLedger,
    lines: impl IntoIterator<Item = &'a CartLine>,
) -> Result<(), CartError> {
    let mut restocked: Vec<&CartLine> = Vec::new();
    for line in lines {
        match ledger.restore_stock(line.product_id, line.quantity) {
            Ok(_) => restocked.push(line),
            Err(ProductError::NotFound(id)) => {
                warn!(product_id = %id, quantity = line.quantity, "Restock skipped, product gone");
            }
            Err(e) => {
                for done in restocked.into_iter().rev() {
                    if let Err(undo) = ledger.take_stock(done.product_id, done.quantity) {
                        warn!(product_id = %done.product_id, error = %undo, "Restock rollback failed");
                    }
                }
                return Err(e.into());
            }
        }
    }
    Ok(())
}

impl Cart {
    /// Takes `quantity` units out of stock and adds them to the product's line.
    pub fn add(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        ledger: &mut dyn StockLedger,
    ) -> Result<CartLine, CartError> {
        if quantity == 0 {
            return Err(CartError::Validation("quantity must be positive".to_string()));
        }
        let product = ledger.take_stock(product_id, quantity)?;
        let line = self
            .lines
            .entry(product_id)
            .or_insert_with(|| CartLine::for_product(&product, 0));
        line.quantity += quantity;
        Ok(line.clone())
    }

    /// Drops the product's line and restores its full quantity.
    pub fn remove(
        &mut self,
        product_id: ProductId,
        ledger: &mut dyn StockLedger,
    ) -> Result<u32, CartError> {
        let line = self
            .lines
            .shift_remove(&product_id)
            .ok_or(CartError::ProductNotInCart(product_id))?;
        put_back(ledger, [&line])?;
        Ok(line.quantity)
    }

    /// Restores every line, then empties the cart. On failure neither stock nor the cart
    /// changes.
    pub fn clear(&mut self, ledger: &mut dyn StockLedger) -> Result<u32, CartError> {
        put_back(ledger, self.lines.values())?;
        let restored = self.lines.values().map(|line| line.quantity).sum();
        self.lines.clear();
        Ok(restored)
    }

    pub fn view(&self) -> IndexMap<String, u32> {
        self.lines
            .values()
            .map(|line| (line.name.clone(), line.quantity))
            .collect()
    }

    /// Empties the cart without restocking and returns what it held.
    pub fn checkout(&mut self) -> Cart {
        Cart {
            id: self.id,
            user_id: self.user_id,
            lines: std::mem::take(&mut self.lines),
        }
    }
}

impl StoreEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = CartUpdate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = dyn StockLedger;
    type Error = CartError;

    const NAME: &'static str = "Cart";

    fn id(&self) -> CartId {
        self.id
    }

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id, params.user_id))
    }

    fn on_update(
        &mut self,
        update: CartUpdate,
        _ledger: &mut Self::Context,
    ) -> Result<(), CartError> {
        if let Some(user_id) = update.user_id {
            self.user_id = user_id;
        }
        Ok(())
    }

    /// Deleting a cart that still holds units gives them back.
    fn on_delete(&self, ledger: &mut Self::Context) -> Result<(), CartError> {
        put_back(ledger, self.lines.values())
    }

    fn handle_action(
        &mut self,
        action: CartAction,
        ledger: &mut Self::Context,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add {
                product_id,
                quantity,
            } => self
                .add(product_id, quantity, ledger)
                .map(CartActionResult::Add),
            CartAction::Remove(product_id) => {
                self.remove(product_id, ledger).map(CartActionResult::Remove)
            }
            CartAction::Clear => self.clear(ledger).map(CartActionResult::Clear),
            CartAction::View => Ok(CartActionResult::View(self.view())),
            CartAction::Checkout => Ok(CartActionResult::Checkout(self.checkout())),
        }
    }
}

impl Persisted for Cart {
    const COLLECTION: &'static str = "carts";
    const ELEMENT: &'static str = "cart";
    type Record = CartRecord;
    type XmlRecord = CartXml;
    type Resolver = dyn ProductLookup;

    fn record_id(record: &CartRecord) -> CartId {
        record.cart_id
    }

    fn to_record(&self) -> CartRecord {
        CartRecord::from(self)
    }

    fn from_record(record: CartRecord, products: &dyn ProductLookup) -> Self {
        let lines = retain_known(record.products, products, |line| line.product_id);
        Self {
            id: record.cart_id,
            user_id: record.user_id,
            lines: lines.into_iter().map(|l| (l.product_id, l)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockStockLedger;
    use crate::model::{Product, UserId};

    fn widget(stock: u32) -> Product {
        Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: 10.0,
            stock,
        }
    }

    fn cart() -> Cart {
        Cart::new(CartId(1), UserId(1))
    }

    #[test]
    fn test_add_takes_stock_and_accumulates() {
        let mut ledger = MockStockLedger::new();
        ledger.expect_take(ProductId(1), 2).return_ok(widget(3));
        ledger.expect_take(ProductId(1), 1).return_ok(widget(2));

        let mut cart = cart();
        cart.add(ProductId(1), 2, &mut ledger).unwrap();
        let line = cart.add(ProductId(1), 1, &mut ledger).unwrap();

        assert_eq!(line.quantity, 3);
        assert_eq!(cart.total(), 30.0);
        ledger.verify();
    }

    #[test]
    fn test_add_zero_never_reaches_ledger() {
        let mut ledger = MockStockLedger::new();
        let err = cart().add(ProductId(1), 0, &mut ledger).unwrap_err();
        assert!(matches!(err, CartError::Validation(_)));
        ledger.verify();
    }

    #[test]
    fn test_add_with_insufficient_stock_leaves_cart_empty() {
        let mut ledger = MockStockLedger::new();
        let shortage = ProductError::InsufficientStock {
            id: ProductId(1),
            requested: 9,
            available: 5,
        };
        ledger.expect_take(ProductId(1), 9).return_err(shortage.clone());

        let mut cart = cart();
        assert_eq!(
            cart.add(ProductId(1), 9, &mut ledger),
            Err(CartError::Stock(shortage))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_restores_whole_line() {
        let mut ledger = MockStockLedger::new();
        ledger.expect_take(ProductId(1), 4).return_ok(widget(1));
        ledger.expect_restore(ProductId(1), 4).return_ok(widget(5));

        let mut cart = cart();
        cart.add(ProductId(1), 4, &mut ledger).unwrap();
        assert_eq!(cart.remove(ProductId(1), &mut ledger), Ok(4));
        assert_eq!(
            cart.remove(ProductId(1), &mut ledger),
            Err(CartError::ProductNotInCart(ProductId(1)))
        );
        ledger.verify();
    }

    #[test]
    fn test_clear_skips_deleted_products() {
        let mut ledger = MockStockLedger::new();
        ledger.expect_take(ProductId(1), 2).return_ok(widget(3));
        ledger
            .expect_restore(ProductId(1), 2)
            .return_err(ProductError::NotFound(ProductId(1)));

        let mut cart = cart();
        cart.add(ProductId(1), 2, &mut ledger).unwrap();
        assert_eq!(cart.clear(&mut ledger), Ok(2));
        assert!(cart.is_empty());
        ledger.verify();
    }

    #[test]
    fn test_failed_clear_takes_back_restocked_lines() {
        let gadget = Product {
            id: ProductId(2),
            name: "Gadget".to_string(),
            ..widget(4)
        };
        let mut ledger = MockStockLedger::new();
        ledger.expect_take(ProductId(1), 2).return_ok(widget(3));
        ledger.expect_take(ProductId(2), 3).return_ok(gadget.clone());
        ledger.expect_restore(ProductId(1), 2).return_ok(widget(5));
        ledger
            .expect_restore(ProductId(2), 3)
            .return_err(ProductError::Validation("stock overflow".to_string()));
        ledger.expect_take(ProductId(1), 2).return_ok(widget(3));

        let mut cart = cart();
        cart.add(ProductId(1), 2, &mut ledger).unwrap();
        cart.add(ProductId(2), 3, &mut ledger).unwrap();

        assert_eq!(
            cart.clear(&mut ledger),
            Err(CartError::Stock(ProductError::Validation(
                "stock overflow".to_string()
            )))
        );
        assert_eq!(cart.quantity_of(ProductId(1)), 2);
        assert_eq!(cart.quantity_of(ProductId(2)), 3);
        ledger.verify();
    }

    #[test]
    fn test_checkout_empties_without_restock() {
        let mut ledger = MockStockLedger::new();
        ledger.expect_take(ProductId(1), 3).return_ok(widget(2));

        let mut cart = cart();
        cart.add(ProductId(1), 3, &mut ledger).unwrap();
        let Ok(CartActionResult::Checkout(snapshot)) =
            cart.handle_action(CartAction::Checkout, &mut ledger)
        else {
            panic!("expected Checkout");
        };

        assert_eq!(snapshot.quantity_of(ProductId(1)), 3);
        assert!(cart.is_empty());
        ledger.verify();
    }

    #[test]
    fn test_view_maps_names_to_quantities() {
        let mut ledger = MockStockLedger::new();
        ledger.expect_take(ProductId(1), 2).return_ok(widget(3));
        let mut cart = cart();
        cart.add(ProductId(1), 2, &mut ledger).unwrap();
        assert_eq!(cart.view().get("Widget"), Some(&2));
    }

    #[test]
    fn test_load_drops_lines_of_unknown_products() {
        let lookup = MockStockLedger::new().with_product(widget(5));
        let record = CartRecord {
            cart_id: CartId(1),
            user_id: UserId(1),
            products: vec![
                CartLine::for_product(&widget(5), 2),
                CartLine {
                    product_id: ProductId(8),
                    name: "Gone".to_string(),
                    price: 1.0,
                    quantity: 1,
                },
            ],
        };
        let cart = Cart::from_record(record, &lookup);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.quantity_of(ProductId(1)), 2);
    }
}
