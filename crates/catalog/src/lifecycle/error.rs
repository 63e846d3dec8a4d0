use crate::address::AddressError;
use crate::cart::CartError;
use crate::category::CategoryError;
use crate::inventory::InventoryError;
use crate::order::OrderError;
use crate::payment::PaymentError;
use crate::product::ProductError;
use crate::rating::RatingError;
use crate::review::ReviewError;
use crate::seller::SellerError;
use crate::user::UserError;
use thiserror::Error;

/// Failure of a [`Catalog`](super::Catalog) workflow, tagged with the entity that failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Seller(#[from] SellerError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error(transparent)]
    Review(#[from] ReviewError),
}
