//! # Store Contract
//!
//! `EntityStore<T>` is the CRUD + Action surface shared by every backend. The in-memory
//! [`ResourceStore`](crate::ResourceStore) and the file-backed
//! [`DocumentStore`](crate::DocumentStore) both implement it, so typed managers are written
//! once and work against either.

use crate::entity::StoreEntity;

/// A type-safe store for one entity type.
///
/// The `*_with` methods take the entity's `Context`. For entities whose context is `()`
/// the plain `create` / `update` / `delete` / `perform_action` shorthands are available.
pub trait EntityStore<T: StoreEntity> {
    /// Validate, assign the next id, run `on_create` and store the entity.
    fn create_with(&mut self, params: T::Create, ctx: &mut T::Context) -> Result<T, T::Error>;

    /// Fetch a copy of the stored entity.
    fn read(&self, id: T::Id) -> Result<T, T::Error>;

    /// Apply a patch through `on_update`. A rejected patch leaves the record untouched.
    fn update_with(
        &mut self,
        id: T::Id,
        update: T::Update,
        ctx: &mut T::Context,
    ) -> Result<T, T::Error>;

    /// Run `on_delete` and remove the entity.
    fn delete_with(&mut self, id: T::Id, ctx: &mut T::Context) -> Result<(), T::Error>;

    /// All entities in insertion order.
    fn list_all(&self) -> Result<Vec<T>, T::Error>;

    /// Run a domain action against the stored entity and keep the mutated state on success.
    fn perform_action_with(
        &mut self,
        id: T::Id,
        action: T::Action,
        ctx: &mut T::Context,
    ) -> Result<T::ActionResult, T::Error>;

    /// Store a pre-built entity under its own id. Fails with `AlreadyExists` on an id or
    /// unique-key collision.
    fn insert(&mut self, entity: T) -> Result<T, T::Error>;

    /// Entities matching `predicate`, in insertion order.
    fn find_where<P>(&self, predicate: P) -> Result<Vec<T>, T::Error>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.list_all()?.into_iter().filter(|e| predicate(e)).collect())
    }

    fn exists(&self, id: T::Id) -> bool {
        self.read(id).is_ok()
    }

    fn create(&mut self, params: T::Create) -> Result<T, T::Error>
    where
        T: StoreEntity<Context = ()>,
    {
        self.create_with(params, &mut ())
    }

    fn update(&mut self, id: T::Id, update: T::Update) -> Result<T, T::Error>
    where
        T: StoreEntity<Context = ()>,
    {
        self.update_with(id, update, &mut ())
    }

    fn delete(&mut self, id: T::Id) -> Result<(), T::Error>
    where
        T: StoreEntity<Context = ()>,
    {
        self.delete_with(id, &mut ())
    }

    fn perform_action(&mut self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error>
    where
        T: StoreEntity<Context = ()>,
    {
        self.perform_action_with(id, action, &mut ())
    }
}
