/// Payment state transitions. Each returns the payment's new
/// [`PaymentStatus`](crate::model::PaymentStatus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentAction {
    /// `Unpaid → Paid`, only while the order is `Placed`.
    Process,
    /// `Paid → Refunded`
    Refund,
}
