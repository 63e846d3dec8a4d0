use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Declares a type-safe `u32` identifier that prints as `<prefix>_<n>`.
macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

typed_id!(
    /// Type-safe identifier for Users.
    UserId,
    "user"
);
typed_id!(
    /// Type-safe identifier for Addresses.
    AddressId,
    "address"
);
typed_id!(
    /// Type-safe identifier for Products. Also keys a product's Rating.
    ProductId,
    "product"
);
typed_id!(
    /// Type-safe identifier for Categories.
    CategoryId,
    "category"
);
typed_id!(
    /// Type-safe identifier for Sellers. Also keys the seller's Inventory.
    SellerId,
    "seller"
);
typed_id!(
    /// Type-safe identifier for Carts.
    CartId,
    "cart"
);
typed_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);
typed_id!(
    /// Type-safe identifier for Payments.
    PaymentId,
    "payment"
);
typed_id!(
    /// Type-safe identifier for Reviews.
    ReviewId,
    "review"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_prefix() {
        assert_eq!(ProductId(7).to_string(), "product_7");
        assert_eq!(OrderId::from(2).to_string(), "order_2");
        assert_eq!(u32::from(CartId(5)), 5);
    }
}
