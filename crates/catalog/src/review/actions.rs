#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    /// Replace comment and score together. The product's aggregate rating is not revisited.
    Edit { comment: String, rating: u8 },
}
