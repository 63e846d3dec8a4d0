//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every resource (User, Product, Order, ...) implements
//! to be managed by a generic store. It names the associated types for ids, payloads, actions,
//! context and errors, and provides the lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`) that both [`ResourceStore`](crate::ResourceStore) and
//! [`DocumentStore`](crate::DocumentStore) drive.
//!
//! # Architecture Note
//! Writing the store logic once against this trait lets the in-memory and the file-backed
//! stores share one CRUD contract. Associated types keep payloads apart: a `User` store only
//! accepts a `UserCreate`, and the compiler rejects a `ProductCreate`.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_create`]
//! - [`StoreEntity::on_delete`]
//! - [`StoreEntity::unique_key`]
//! - [`StoreEntity::preset_id`]
//!
//! The defaults do nothing, so an entity only overrides what it needs.

use crate::error::FrameworkError;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier of a stored entity.
///
/// Ids are integer newtypes: they are generated from a `u32` sequence and reported as `u32`
/// in framework errors.
pub trait EntityId: Copy + Eq + Hash + Debug + Display + From<u32> + Into<u32> {}

impl<T> EntityId for T where T: Copy + Eq + Hash + Debug + Display + From<u32> + Into<u32> {}

/// Trait that any resource entity must implement to be managed by a store.
///
/// # Context
/// `Context` holds the dependencies a hook needs from other stores (a stock ledger, an order
/// lookup). It is handed to every hook per call, so stores never own each other. Use `()`
/// when the entity has no dependencies; trait objects such as `dyn StockLedger` are allowed.
pub trait StoreEntity: Clone + Debug {
    /// The unique identifier for this entity.
    type Id: EntityId;

    /// The data required to create a new instance.
    type Create: Debug;

    /// A patch of optional fields applied by `on_update`.
    type Update: Debug;

    /// Enum of resource-specific operations (e.g. `UpdateStock`).
    type Action: Debug;

    /// The result type returned by custom actions.
    type ActionResult: Debug;

    /// Dependencies injected into the hooks.
    type Context: ?Sized;

    /// The error type for this entity.
    ///
    /// One enum per entity rather than one per operation: callers match on a single
    /// `ProductError`, and store-level failures arrive through `From<FrameworkError>`.
    type Error: std::error::Error + From<FrameworkError>;

    /// Human-readable entity name used in logs and framework errors.
    const NAME: &'static str;

    fn id(&self) -> Self::Id;

    /// A secondary key that must be unique within a store (e.g. a user's email).
    fn unique_key(&self) -> Option<&str> {
        None
    }

    /// Entities keyed by a foreign id take it from the payload instead of the sequence.
    fn preset_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Construct and validate the entity from its id and payload.
    /// Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    /// Called after construction, before the entity is stored.
    /// Side effects on other stores go through `ctx`.
    fn on_create(&mut self, _ctx: &mut Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a patch. Stores run this against a copy and only keep it on success.
    fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &mut Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    fn on_delete(&self, _ctx: &mut Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &mut Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

