//! Entity trait implementation for the Product domain type.
//!
//! Enables [`Product`] to be managed by any store, with actions for stock and price
//! changes. Products are flat, so the stored record is the product itself.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::error::{require_amount, require_text};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use store_framework::{Persisted, StoreEntity};

impl Product {
    /// Moves stock by `delta`, refusing to go below zero.
    pub fn adjust_stock(&mut self, delta: i64) -> Result<u32, ProductError> {
        let next = i64::from(self.stock) + delta;
        if next < 0 {
            return Err(ProductError::InsufficientStock {
                id: self.id,
                requested: delta.unsigned_abs(),
                available: self.stock,
            });
        }
        self.stock = u32::try_from(next)
            .map_err(|_| ProductError::Validation(format!("stock {next} is out of range")))?;
        Ok(self.stock)
    }

    pub fn set_price(&mut self, price: f64) -> Result<f64, ProductError> {
        require_amount("price", price).map_err(ProductError::Validation)?;
        self.price = price;
        Ok(self.price)
    }
}

impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    const NAME: &'static str = "Product";

    fn id(&self) -> ProductId {
        self.id
    }

    /// Creates a new Product, validating name, category and price.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        require_text("name", &params.name).map_err(ProductError::Validation)?;
        require_text("category", &params.category).map_err(ProductError::Validation)?;
        require_amount("price", params.price).map_err(ProductError::Validation)?;
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            stock: params.stock,
        })
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`, `category`: must stay non-empty
    /// - `price`: must stay non-negative
    /// - `stock`: absolute stock level
    fn on_update(&mut self, update: ProductUpdate, _ctx: &mut ()) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            require_text("name", &name).map_err(ProductError::Validation)?;
            self.name = name;
        }
        if let Some(category) = update.category {
            require_text("category", &category).map_err(ProductError::Validation)?;
            self.category = category;
        }
        if let Some(price) = update.price {
            self.set_price(price)?;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &mut (),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::CheckAvailability => {
                Ok(ProductActionResult::CheckAvailability(self.is_available()))
            }
            ProductAction::UpdateStock(delta) => {
                self.adjust_stock(delta).map(ProductActionResult::UpdateStock)
            }
            ProductAction::UpdatePrice(price) => {
                self.set_price(price).map(ProductActionResult::UpdatePrice)
            }
        }
    }
}

impl Persisted for Product {
    const COLLECTION: &'static str = "products";
    const ELEMENT: &'static str = "product";
    type Record = Product;
    type XmlRecord = Product;
    type Resolver = ();

    fn record_id(record: &Product) -> ProductId {
        record.id
    }

    fn to_record(&self) -> Product {
        self.clone()
    }

    fn from_record(record: Product, _resolver: &()) -> Self {
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn widget() -> Product {
        Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: 10.0,
            stock: 5,
        }
    }

    #[test_case("", "Tools", 1.0 ; "empty name")]
    #[test_case("Widget", " ", 1.0 ; "blank category")]
    #[test_case("Widget", "Tools", -1.0 ; "negative price")]
    #[test_case("Widget", "Tools", f64::NAN ; "nan price")]
    fn test_create_rejects_invalid_params(name: &str, category: &str, price: f64) {
        let params = ProductCreate::new(name, category, price, 1);
        assert!(matches!(
            Product::from_create_params(ProductId(1), params),
            Err(ProductError::Validation(_))
        ));
    }

    #[test]
    fn test_create_accepts_free_product_without_stock() {
        let product =
            Product::from_create_params(ProductId(3), ProductCreate::new("Sample", "Misc", 0.0, 0))
                .unwrap();
        assert_eq!(product.id, ProductId(3));
        assert!(!product.is_available());
    }

    #[test]
    fn test_update_stock_is_relative() {
        let mut product = widget();
        let result = product
            .handle_action(ProductAction::UpdateStock(-3), &mut ())
            .unwrap();
        assert_eq!(result, ProductActionResult::UpdateStock(2));
        assert_eq!(
            product.handle_action(ProductAction::UpdateStock(4), &mut ()),
            Ok(ProductActionResult::UpdateStock(6))
        );
    }

    #[test]
    fn test_update_stock_below_zero_fails_and_keeps_stock() {
        let mut product = widget();
        let err = product
            .handle_action(ProductAction::UpdateStock(-6), &mut ())
            .unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock {
                id: ProductId(1),
                requested: 6,
                available: 5
            }
        );
        assert_eq!(product.stock, 5);
    }

    #[test]
    fn test_update_price_rejects_negative() {
        let mut product = widget();
        assert!(product
            .handle_action(ProductAction::UpdatePrice(-2.0), &mut ())
            .is_err());
        assert_eq!(product.price, 10.0);
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let mut product = widget();
        product
            .on_update(
                ProductUpdate {
                    price: Some(12.5),
                    ..Default::default()
                },
                &mut (),
            )
            .unwrap();
        assert_eq!(product.price, 12.5);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.stock, 5);
    }
}
