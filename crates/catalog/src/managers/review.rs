//! # Rating & Review Managers
//!
//! `RatingManager` keeps one aggregate per product and is the [`RatingLedger`] reviews
//! report their scores to.

use crate::ledger::{Detached, RatingLedger};
use crate::model::{
    ProductId, Rating, RatingCreate, RatingUpdate, Review, ReviewCreate, ReviewId, ReviewUpdate,
};
use crate::rating::{RatingAction, RatingError};
use crate::review::{ReviewAction, ReviewError};
use store_framework::{EntityStore, Manager, ResourceStore};
use tracing::{debug, instrument};

/// Manager for ratings, in memory by default. Ratings are keyed by product id.
#[derive(Debug, Default)]
pub struct RatingManager<S = ResourceStore<Rating>> {
    store: S,
}

impl RatingManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Rating>> Manager<Rating> for RatingManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Rating>> RatingManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn create_rating(&mut self, product_id: ProductId) -> Result<Rating, RatingError> {
        self.store.create(RatingCreate { product_id })
    }

    /// Folds one score into the product's average.
    #[instrument(skip(self))]
    pub fn update_rating(&mut self, product_id: ProductId, score: u8) -> Result<Rating, RatingError> {
        self.store.perform_action(product_id, RatingAction::Rate(score))
    }

    #[instrument(skip(self))]
    pub fn reset_rating(&mut self, product_id: ProductId) -> Result<Rating, RatingError> {
        self.store.perform_action(product_id, RatingAction::Reset)
    }

    /// Overwrites the aggregate directly.
    #[instrument(skip(self))]
    pub fn set_rating(
        &mut self,
        product_id: ProductId,
        update: RatingUpdate,
    ) -> Result<Rating, RatingError> {
        self.store.update(product_id, update)
    }
}

impl<S: EntityStore<Rating>> RatingLedger for RatingManager<S> {
    fn record_rating(&mut self, product_id: ProductId, score: u8) -> Result<Rating, RatingError> {
        if !self.store.exists(product_id) {
            debug!(%product_id, "First score, creating rating");
            self.create_rating(product_id)?;
        }
        self.update_rating(product_id, score)
    }
}

/// Manager for reviews, in memory by default.
#[derive(Debug, Default)]
pub struct ReviewManager<S = ResourceStore<Review>> {
    store: S,
}

impl ReviewManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Review>> Manager<Review> for ReviewManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Review>> ReviewManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Stores the review and applies its score to the product's rating.
    #[instrument(skip(self, params, ratings), fields(product_id = %params.product.id))]
    pub fn add_review(
        &mut self,
        params: ReviewCreate,
        ratings: &mut (dyn RatingLedger + 'static),
    ) -> Result<Review, ReviewError> {
        debug!(?params, "Adding review");
        self.store.create_with(params, ratings)
    }

    /// Replaces comment and score. The product's rating is left alone.
    #[instrument(skip(self))]
    pub fn edit_review(
        &mut self,
        id: ReviewId,
        comment: String,
        rating: u8,
    ) -> Result<Review, ReviewError> {
        self.store
            .perform_action_with(id, ReviewAction::Edit { comment, rating }, &mut Detached)
    }

    #[instrument(skip(self))]
    pub fn update_review(
        &mut self,
        id: ReviewId,
        update: ReviewUpdate,
    ) -> Result<Review, ReviewError> {
        self.store.update_with(id, update, &mut Detached)
    }

    #[instrument(skip(self))]
    pub fn delete_review(&mut self, id: ReviewId) -> Result<(), ReviewError> {
        self.store.delete_with(id, &mut Detached)
    }

    #[instrument(skip(self))]
    pub fn reviews_for_product(&self, product_id: ProductId) -> Result<Vec<Review>, ReviewError> {
        self.store
            .find_where(|r: &Review| r.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, UserId};

    fn review(score: u8) -> ReviewCreate {
        ReviewCreate {
            user_id: UserId(1),
            product: Product {
                id: ProductId(1),
                name: "Widget".to_string(),
                category: "Tools".to_string(),
                price: 10.0,
                stock: 5,
            },
            rating: score,
            comment: "fine".to_string(),
        }
    }

    #[test]
    fn test_reviews_create_rating_on_first_use() {
        let mut ratings = RatingManager::new();
        let mut reviews = ReviewManager::new();
        for score in [4, 2, 5] {
            reviews.add_review(review(score), &mut ratings).unwrap();
        }

        let rating = ratings.read(ProductId(1)).unwrap();
        assert_eq!(rating.total_reviews, 3);
        assert!((rating.average_rating - 3.6667).abs() < 1e-4);
        assert_eq!(reviews.reviews_for_product(ProductId(1)).unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_review_leaves_rating_untouched() {
        let mut ratings = RatingManager::new();
        let mut reviews = ReviewManager::new();
        assert_eq!(
            reviews.add_review(review(7), &mut ratings),
            Err(ReviewError::InvalidRating(7))
        );
        assert_eq!(ratings.read(ProductId(1)), Err(RatingError::NotFound(ProductId(1))));
    }

    #[test]
    fn test_edit_does_not_rerate() {
        let mut ratings = RatingManager::new();
        let mut reviews = ReviewManager::new();
        let first = reviews.add_review(review(5), &mut ratings).unwrap();
        reviews.edit_review(first.id, "meh".to_string(), 2).unwrap();

        assert_eq!(ratings.read(ProductId(1)).unwrap().average_rating, 5.0);
        assert_eq!(reviews.read(first.id).unwrap().rating, 2);
    }

    #[test]
    fn test_reset_rating() {
        let mut ratings = RatingManager::new();
        ratings.record_rating(ProductId(2), 3).unwrap();
        let reset = ratings.reset_rating(ProductId(2)).unwrap();
        assert_eq!((reset.total_reviews, reset.average_rating), (0, 0.0));
        assert_eq!(
            ratings.update_rating(ProductId(2), 0),
            Err(RatingError::InvalidRating(0))
        );
    }
}
