use crate::model::{Product, ProductId, ReviewId, UserId};
use serde::{Deserialize, Serialize};

/// Aggregate score of one product, maintained incrementally as reviews arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub product_id: ProductId,
    pub total_reviews: u32,
    pub average_rating: f64,
}

impl Rating {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            total_reviews: 0,
            average_rating: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RatingCreate {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, Default)]
pub struct RatingUpdate {
    pub total_reviews: Option<u32>,
    pub average_rating: Option<f64>,
}

/// A user's review of a product. Creating one feeds its score into the product's Rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "review_id")]
    pub id: ReviewId,
    pub user_id: UserId,
    pub product: Product,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub user_id: UserId,
    pub product: Product,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub comment: Option<String>,
    pub rating: Option<u8>,
}
