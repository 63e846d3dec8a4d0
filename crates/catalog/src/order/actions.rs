/// Order state transitions. Each returns the order's new [`OrderStatus`](crate::model::OrderStatus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// `Pending → Placed`
    Place,
    /// `Placed → Cancelled`, restocking the order's lines.
    Cancel,
    /// `Placed → Completed`
    Complete,
}
