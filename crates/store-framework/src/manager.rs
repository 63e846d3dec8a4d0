//! # Manager Trait
//!
//! Common interface for resource-specific managers. A manager wraps any
//! [`EntityStore`] of its entity and adds the domain vocabulary on top; this trait gives
//! every manager `read`, `list_all` and `insert` for free.

use crate::entity::StoreEntity;
use crate::store::EntityStore;
use tracing::{debug, instrument};

/// Trait for resource-specific managers to inherit the standard operations.
///
/// # Example
///
/// ```rust
/// use store_framework::{EntityStore, FrameworkError, Manager, ResourceStore, StoreEntity};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
/// impl From<FrameworkError> for TagError { fn from(_: FrameworkError) -> Self { TagError } }
///
/// impl StoreEntity for Tag {
///     type Id = u32; type Create = TagCreate; type Update = (); type Action = TagAction;
///     type ActionResult = (); type Context = (); type Error = TagError;
///     const NAME: &'static str = "Tag";
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, p: TagCreate) -> Result<Self, TagError> {
///         Ok(Self { id, label: p.label })
///     }
///     fn on_update(&mut self, _: (), _: &mut ()) -> Result<(), TagError> { Ok(()) }
///     fn handle_action(&mut self, a: TagAction, _: &mut ()) -> Result<(), TagError> { match a {} }
/// }
///
/// struct TagManager { store: ResourceStore<Tag> }
///
/// impl Manager<Tag> for TagManager {
///     type Store = ResourceStore<Tag>;
///     fn store(&self) -> &Self::Store { &self.store }
///     fn store_mut(&mut self) -> &mut Self::Store { &mut self.store }
/// }
///
/// let mut tags = TagManager { store: ResourceStore::new() };
/// let tag = tags.store_mut().create(TagCreate { label: "rust".into() }).unwrap();
/// // read() and list_all() are provided
/// assert_eq!(tags.read(tag.id).unwrap().label, "rust");
/// assert_eq!(tags.list_all().unwrap().len(), 1);
/// ```
pub trait Manager<T: StoreEntity> {
    type Store: EntityStore<T>;

    fn store(&self) -> &Self::Store;

    fn store_mut(&mut self) -> &mut Self::Store;

    /// Fetch an entity by id.
    #[instrument(skip(self))]
    fn read(&self, id: T::Id) -> Result<T, T::Error> {
        debug!("Reading");
        self.store().read(id)
    }

    #[instrument(skip(self))]
    fn list_all(&self) -> Result<Vec<T>, T::Error> {
        self.store().list_all()
    }

    /// Store a pre-built entity under its own id.
    #[instrument(skip(self))]
    fn insert(&mut self, entity: T) -> Result<T, T::Error> {
        self.store_mut().insert(entity)
    }

    /// Remove an entity whose hooks need no context.
    #[instrument(skip(self))]
    fn delete(&mut self, id: T::Id) -> Result<(), T::Error>
    where
        T: StoreEntity<Context = ()>,
    {
        debug!("Deleting");
        self.store_mut().delete(id)
    }
}
