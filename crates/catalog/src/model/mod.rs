//! Plain data types: entities, their ids and the create/update payloads.
//!
//! Behaviour lives next to each entity's [`StoreEntity`](store_framework::StoreEntity)
//! implementation in the per-entity modules.

pub mod ids;
pub mod order;
pub mod product;
pub mod review;
pub mod seller;
pub mod user;

pub use ids::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use seller::*;
pub use user::*;
