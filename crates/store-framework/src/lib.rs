//! # Store Framework
//!
//! Building blocks for typed entity stores. Every resource type implements
//! [`StoreEntity`] once and can then be kept either in process memory
//! ([`ResourceStore`]) or in a JSON/XML document on disk ([`DocumentStore`]); both speak the
//! same [`EntityStore`] contract, so the managers built on top are backend-agnostic.
//!
//! ## Core Components
//!
//! - [`StoreEntity`]: ids, payloads, actions, context, errors and lifecycle hooks.
//! - [`EntityStore`]: create / read / update / delete / list / action / insert.
//! - [`ResourceStore`]: insertion-ordered in-memory store with its own [`IdSequence`].
//! - [`DocumentStore`]: whole-document read/modify/write store, one file per collection.
//! - [`Persisted`]: how an entity maps to a serializable record and back.
//! - [`Json`] / [`Xml`]: document encodings.
//! - [`Manager`]: provided `read` / `list_all` / `insert` for typed managers.
//! - [`mock`]: an expectation-driven [`EntityStore`] for unit tests.
//!
//! ## Context Injection
//!
//! Stores never own each other. When an entity's hook needs another store (a cart moving
//! stock, a payment checking its order) the dependency is passed per call as the entity's
//! `Context`:
//!
//! ```rust,ignore
//! impl StoreEntity for Cart {
//!     type Context = dyn StockLedger;
//!     // ...
//! }
//!
//! carts.perform_action_with(cart_id, CartAction::Add { product_id, quantity }, &mut products)?;
//! ```
//!
//! ## Concurrency Model
//!
//! Single-threaded and synchronous. A `DocumentStore` rewrites the whole file on every
//! mutating call without locking; concurrent writers to the same document are not supported.

pub mod document;
pub mod entity;
pub mod error;
pub mod format;
pub mod manager;
pub mod mock;
pub mod persist;
pub mod resource;
pub mod sequence;
pub mod store;

#[cfg(test)]
mod testing;

pub use document::DocumentStore;
pub use entity::{EntityId, StoreEntity};
pub use error::{FrameworkError, StorageError};
pub use format::{DocumentFormat, Json, Xml};
pub use manager::Manager;
pub use persist::Persisted;
pub use resource::ResourceStore;
pub use sequence::IdSequence;
pub use store::EntityStore;
