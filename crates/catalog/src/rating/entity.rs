//! Entity trait implementation for the Rating domain type.

use super::actions::RatingAction;
use super::error::RatingError;
use crate::model::{ProductId, Rating, RatingCreate, RatingUpdate};
use store_framework::{Persisted, StoreEntity};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Rejects scores outside `1..=5`.
pub fn check_score(score: u8) -> Result<u8, RatingError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(RatingError::InvalidRating(score))
    }
}

impl Rating {
    /// `average = (average * n + score) / (n + 1)`, then `n += 1`.
    pub fn rate(&mut self, score: u8) -> Result<f64, RatingError> {
        check_score(score)?;
        let n = f64::from(self.total_reviews);
        self.average_rating = (self.average_rating * n + f64::from(score)) / (n + 1.0);
        self.total_reviews += 1;
        Ok(self.average_rating)
    }

    pub fn reset(&mut self) {
        self.total_reviews = 0;
        self.average_rating = 0.0;
    }
}

impl StoreEntity for Rating {
    type Id = ProductId;
    type Create = RatingCreate;
    type Update = RatingUpdate;
    type Action = RatingAction;
    type ActionResult = Rating;
    type Context = ();
    type Error = RatingError;

    const NAME: &'static str = "Rating";

    fn id(&self) -> ProductId {
        self.product_id
    }

    fn preset_id(params: &RatingCreate) -> Option<ProductId> {
        Some(params.product_id)
    }

    fn from_create_params(id: ProductId, _params: RatingCreate) -> Result<Self, RatingError> {
        Ok(Rating::new(id))
    }

    fn on_update(&mut self, update: RatingUpdate, _ctx: &mut ()) -> Result<(), RatingError> {
        if let Some(average) = update.average_rating {
            if !(0.0..=f64::from(MAX_SCORE)).contains(&average) {
                return Err(RatingError::Validation(format!(
                    "average_rating must be within 0..=5, got {average}"
                )));
            }
            self.average_rating = average;
        }
        if let Some(total) = update.total_reviews {
            self.total_reviews = total;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: RatingAction, _ctx: &mut ()) -> Result<Rating, RatingError> {
        match action {
            RatingAction::Rate(score) => {
                self.rate(score)?;
            }
            RatingAction::Reset => self.reset(),
        }
        Ok(self.clone())
    }
}

impl Persisted for Rating {
    const COLLECTION: &'static str = "ratings";
    const ELEMENT: &'static str = "rating";
    type Record = Rating;
    type XmlRecord = Rating;
    type Resolver = ();

    fn record_id(record: &Rating) -> ProductId {
        record.product_id
    }

    fn to_record(&self) -> Rating {
        self.clone()
    }

    fn from_record(record: Rating, _resolver: &()) -> Self {
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_incremental_mean() {
        let mut rating = Rating::new(ProductId(1));
        for score in [4, 2, 5] {
            rating.rate(score).unwrap();
        }
        assert_eq!(rating.total_reviews, 3);
        assert!((rating.average_rating - 11.0 / 3.0).abs() < 1e-9);
    }

    #[test_case(0 ; "zero")]
    #[test_case(6 ; "above five")]
    fn test_out_of_range_score_is_rejected(score: u8) {
        let mut rating = Rating::new(ProductId(1));
        assert_eq!(rating.rate(score), Err(RatingError::InvalidRating(score)));
        assert_eq!(rating.total_reviews, 0);
    }

    #[test]
    fn test_reset_zeroes_both() {
        let mut rating = Rating::new(ProductId(1));
        rating.rate(5).unwrap();
        let reset = rating.handle_action(RatingAction::Reset, &mut ()).unwrap();
        assert_eq!(reset, Rating::new(ProductId(1)));
    }

    #[test]
    fn test_update_rejects_average_above_five() {
        let mut rating = Rating::new(ProductId(1));
        let update = RatingUpdate {
            average_rating: Some(5.5),
            ..Default::default()
        };
        assert!(matches!(
            rating.on_update(update, &mut ()),
            Err(RatingError::Validation(_))
        ));
    }
}
