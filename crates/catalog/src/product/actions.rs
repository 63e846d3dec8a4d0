//! Custom actions for Product stores.
//!
//! Domain operations on a [`Product`](crate::model::Product) beyond CRUD, handled by
//! [`StoreEntity::handle_action`](store_framework::StoreEntity::handle_action).

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// True when at least one unit is in stock.
    CheckAvailability,
    /// Moves stock by a relative amount.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` if the result would be negative.
    UpdateStock(i64),
    /// Sets a new, non-negative price.
    UpdatePrice(f64),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    CheckAvailability(bool),
    /// The stock level after the move.
    UpdateStock(u32),
    /// The price after the change.
    UpdatePrice(f64),
}
