//! Property tests for stock conservation and rating averages.

use catalog::lifecycle::Catalog;
use catalog::model::{ProductCreate, UserCreate};
use proptest::prelude::*;
use store_framework::Manager;

const STOCK: u32 = 20;

#[derive(Debug, Clone)]
enum Step {
    Add(u32),
    Remove,
    Clear,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1u32..=8).prop_map(Step::Add),
        Just(Step::Remove),
        Just(Step::Clear),
    ]
}

proptest! {
    /// Property: units are only ever moved between stock and the cart, never lost or made.
    #[test]
    fn prop_cart_conserves_stock(steps in prop::collection::vec(step(), 1..40)) {
        let mut catalog = Catalog::in_memory();
        let widget = catalog
            .products
            .create_product(ProductCreate::new("Widget", "Tools", 1.0, STOCK))
            .unwrap();
        let (_, cart) = catalog
            .register_user(UserCreate::new("prop@example.com", "Prop"))
            .unwrap();

        for step in steps {
            // Over-reservations and removing an absent line are refused; both are fine here
            let _ = match step {
                Step::Add(quantity) => catalog.add_to_cart(cart.id, widget.id, quantity).map(|_| ()),
                Step::Remove => catalog.remove_from_cart(cart.id, widget.id).map(|_| ()),
                Step::Clear => catalog.clear_cart(cart.id).map(|_| ()),
            };
            let in_stock = catalog.products.check_stock(widget.id).unwrap();
            let in_cart = catalog.carts.read(cart.id).unwrap().quantity_of(widget.id);
            prop_assert_eq!(in_stock + in_cart, STOCK);
        }
    }

    /// Property: the running average equals the arithmetic mean of every score.
    #[test]
    fn prop_rating_is_mean_of_scores(scores in prop::collection::vec(1u8..=5, 1..30)) {
        let mut catalog = Catalog::in_memory();
        let widget = catalog
            .products
            .create_product(ProductCreate::new("Widget", "Tools", 1.0, 1))
            .unwrap();
        let (user, _) = catalog
            .register_user(UserCreate::new("prop@example.com", "Prop"))
            .unwrap();

        for score in &scores {
            catalog.review(user.id, widget.id, *score, "ok").unwrap();
        }

        let rating = catalog.ratings.read(widget.id).unwrap();
        let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64;
        prop_assert_eq!(rating.total_reviews as usize, scores.len());
        prop_assert!((rating.average_rating - mean).abs() < 1e-9);
    }

    /// Property: out-of-range scores never reach the rating.
    #[test]
    fn prop_invalid_scores_rejected(score in prop_oneof![Just(0u8), 6u8..=u8::MAX]) {
        let mut catalog = Catalog::in_memory();
        let widget = catalog
            .products
            .create_product(ProductCreate::new("Widget", "Tools", 1.0, 1))
            .unwrap();

        prop_assert!(catalog.review(catalog::model::UserId(1), widget.id, score, "x").is_err());
        prop_assert!(catalog.ratings.read(widget.id).is_err());
    }
}
