/// Operations on a product's aggregate rating. Both return the updated
/// [`Rating`](crate::model::Rating).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingAction {
    /// Fold one score in `1..=5` into the average.
    Rate(u8),
    Reset,
}
