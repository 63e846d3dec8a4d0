//! Entity trait implementation for the Review domain type.

use super::actions::ReviewAction;
use super::error::ReviewError;
use crate::error::require_text;
use crate::ledger::RatingLedger;
use crate::model::{Review, ReviewCreate, ReviewId, ReviewUpdate};
use crate::rating::check_score;
use store_framework::{Persisted, StoreEntity};

fn score(rating: u8) -> Result<u8, ReviewError> {
    check_score(rating).map_err(|_| ReviewError::InvalidRating(rating))
}

fn comment(text: String) -> Result<String, ReviewError> {
    require_text("comment", &text).map_err(ReviewError::Validation)?;
    Ok(text)
}

impl StoreEntity for Review {
    type Id = ReviewId;
    type Create = ReviewCreate;
    type Update = ReviewUpdate;
    type Action = ReviewAction;
    type ActionResult = Review;
    type Context = dyn RatingLedger;
    type Error = ReviewError;

    const NAME: &'static str = "Review";

    fn id(&self) -> ReviewId {
        self.id
    }

    fn from_create_params(id: ReviewId, params: ReviewCreate) -> Result<Self, ReviewError> {
        Ok(Self {
            id,
            user_id: params.user_id,
            product: params.product,
            rating: score(params.rating)?,
            comment: comment(params.comment)?,
        })
    }

    /// Feeds the score into the product's aggregate rating, exactly once per review.
    fn on_create(&mut self, ratings: &mut Self::Context) -> Result<(), ReviewError> {
        ratings.record_rating(self.product.id, self.rating)?;
        Ok(())
    }

    fn on_update(
        &mut self,
        update: ReviewUpdate,
        _ratings: &mut Self::Context,
    ) -> Result<(), ReviewError> {
        if let Some(text) = update.comment {
            self.comment = comment(text)?;
        }
        if let Some(rating) = update.rating {
            self.rating = score(rating)?;
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: ReviewAction,
        _ratings: &mut Self::Context,
    ) -> Result<Review, ReviewError> {
        match action {
            ReviewAction::Edit {
                comment: text,
                rating,
            } => {
                let rating = score(rating)?;
                self.comment = comment(text)?;
                self.rating = rating;
            }
        }
        Ok(self.clone())
    }
}

impl Persisted for Review {
    const COLLECTION: &'static str = "reviews";
    const ELEMENT: &'static str = "review";
    type Record = Review;
    type XmlRecord = Review;
    type Resolver = ();

    fn record_id(record: &Review) -> ReviewId {
        record.id
    }

    fn to_record(&self) -> Review {
        self.clone()
    }

    fn from_record(record: Review, _resolver: &()) -> Self {
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId, Rating, UserId};
    use crate::rating::RatingError;

    /// Records every score it is handed.
    #[derive(Default)]
    struct Scores(Vec<(ProductId, u8)>);

    impl RatingLedger for Scores {
        fn record_rating(&mut self, product_id: ProductId, score: u8) -> Result<Rating, RatingError> {
            self.0.push((product_id, score));
            let mut rating = Rating::new(product_id);
            rating.rate(score)?;
            Ok(rating)
        }
    }

    fn params(rating: u8, comment: &str) -> ReviewCreate {
        ReviewCreate {
            user_id: UserId(1),
            product: Product {
                id: ProductId(4),
                name: "Kettle".to_string(),
                category: "Kitchen".to_string(),
                price: 25.0,
                stock: 1,
            },
            rating,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn test_create_records_score_once() {
        let mut scores = Scores::default();
        let mut review = Review::from_create_params(ReviewId(1), params(4, "Boils fast")).unwrap();
        review.on_create(&mut scores).unwrap();
        assert_eq!(scores.0, vec![(ProductId(4), 4)]);
    }

    #[test]
    fn test_invalid_score_and_blank_comment() {
        assert_eq!(
            Review::from_create_params(ReviewId(1), params(0, "ok")),
            Err(ReviewError::InvalidRating(0))
        );
        assert!(matches!(
            Review::from_create_params(ReviewId(1), params(3, "")),
            Err(ReviewError::Validation(_))
        ));
    }

    #[test]
    fn test_edit_replaces_without_touching_aggregate() {
        let mut scores = Scores::default();
        let mut review = Review::from_create_params(ReviewId(1), params(4, "Boils fast")).unwrap();
        let edited = review
            .handle_action(
                ReviewAction::Edit {
                    comment: "Leaks".to_string(),
                    rating: 1,
                },
                &mut scores,
            )
            .unwrap();
        assert_eq!((edited.rating, edited.comment.as_str()), (1, "Leaks"));
        assert!(scores.0.is_empty());
    }

    #[test]
    fn test_edit_with_bad_score_keeps_review() {
        let mut scores = Scores::default();
        let mut review = Review::from_create_params(ReviewId(1), params(4, "Boils fast")).unwrap();
        let result = review.handle_action(
            ReviewAction::Edit {
                comment: "Leaks".to_string(),
                rating: 9,
            },
            &mut scores,
        );
        assert_eq!(result, Err(ReviewError::InvalidRating(9)));
        assert_eq!(review.comment, "Boils fast");
    }
}
