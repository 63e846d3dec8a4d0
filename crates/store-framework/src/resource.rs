//! # In-Memory Store
//!
//! `ResourceStore<T>` owns the entities of one type for the lifetime of the process. It is
//! the "Manager" backend: an insertion-ordered map from id to entity plus the store's own
//! [`IdSequence`].

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::sequence::IdSequence;
use crate::store::EntityStore;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// Generic in-memory store for a collection of entities.
///
/// ## Operations
///
/// * **Create**:
///     1. Takes the id from the payload (`preset_id`) or peeks the sequence.
///     2. Calls `T::from_create_params`, which validates the payload.
///     3. Rejects id or unique-key collisions.
///     4. Calls the `on_create` hook with the injected context.
///     5. Stores the entity and advances the sequence.
///
/// * **Update** / **Action**:
///     1. Clones the stored entity.
///     2. Runs `on_update` / `handle_action` on the clone.
///     3. Replaces the stored entity only if the hook succeeded.
///
/// * **Delete**:
///     1. Calls `on_delete`.
///     2. Removes the entity, keeping the order of the others.
///
/// Ids come from a per-store counter and are never reused after a delete.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: StoreEntity> {
    store: IndexMap<T::Id, T>,
    ids: IdSequence,
}

impl<T: StoreEntity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self {
            store: IndexMap::new(),
            ids: IdSequence::new(),
        }
    }
}

impl<T: StoreEntity> ResourceStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Rewind this store's id sequence. Existing entities are kept.
    pub fn reset_ids(&mut self) {
        self.ids.reset();
    }

    fn not_found(id: T::Id) -> T::Error {
        warn!(entity_type = T::NAME, %id, "Not found");
        FrameworkError::NotFound {
            entity: T::NAME,
            id: id.into(),
        }
        .into()
    }

    /// Reject `item` if its id or unique key is taken by an entity other than `skip`.
    fn ensure_vacant(&self, item: &T, skip: Option<T::Id>) -> Result<(), T::Error> {
        let id = item.id();
        if skip != Some(id) && self.store.contains_key(&id) {
            warn!(entity_type = T::NAME, %id, "Duplicate id");
            return Err(FrameworkError::AlreadyExists {
                entity: T::NAME,
                key: id.to_string(),
            }
            .into());
        }
        if let Some(key) = item.unique_key() {
            let taken = self
                .store
                .values()
                .any(|other| Some(other.id()) != skip && other.unique_key() == Some(key));
            if taken {
                warn!(entity_type = T::NAME, key, "Duplicate key");
                return Err(FrameworkError::AlreadyExists {
                    entity: T::NAME,
                    key: key.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl<T: StoreEntity> EntityStore<T> for ResourceStore<T> {
    fn create_with(&mut self, params: T::Create, ctx: &mut T::Context) -> Result<T, T::Error> {
        debug!(entity_type = T::NAME, ?params, "Create");
        let preset = T::preset_id(&params);
        let id = preset.unwrap_or_else(|| T::Id::from(self.ids.peek()));

        let mut item = T::from_create_params(id, params).inspect_err(|e| {
            warn!(entity_type = T::NAME, error = %e, "Create failed");
        })?;
        self.ensure_vacant(&item, None)?;
        item.on_create(ctx).inspect_err(|e| {
            warn!(entity_type = T::NAME, %id, error = %e, "on_create failed");
        })?;

        if preset.is_none() {
            self.ids.advance();
        }
        self.store.insert(id, item.clone());
        info!(entity_type = T::NAME, %id, size = self.store.len(), "Created");
        Ok(item)
    }

    fn read(&self, id: T::Id) -> Result<T, T::Error> {
        let item = self.store.get(&id).cloned();
        debug!(entity_type = T::NAME, %id, found = item.is_some(), "Get");
        item.ok_or_else(|| Self::not_found(id))
    }

    fn update_with(
        &mut self,
        id: T::Id,
        update: T::Update,
        ctx: &mut T::Context,
    ) -> Result<T, T::Error> {
        debug!(entity_type = T::NAME, %id, ?update, "Update");
        let mut item = self.read(id)?;
        item.on_update(update, ctx).inspect_err(|e| {
            warn!(entity_type = T::NAME, %id, error = %e, "Update failed");
        })?;
        self.ensure_vacant(&item, Some(id))?;
        self.store.insert(id, item.clone());
        info!(entity_type = T::NAME, %id, "Updated");
        Ok(item)
    }

    fn delete_with(&mut self, id: T::Id, ctx: &mut T::Context) -> Result<(), T::Error> {
        debug!(entity_type = T::NAME, %id, "Delete");
        let item = self.store.get(&id).ok_or_else(|| Self::not_found(id))?;
        item.on_delete(ctx).inspect_err(|e| {
            warn!(entity_type = T::NAME, %id, error = %e, "on_delete failed");
        })?;
        self.store.shift_remove(&id);
        info!(entity_type = T::NAME, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<T>, T::Error> {
        Ok(self.store.values().cloned().collect())
    }

    fn perform_action_with(
        &mut self,
        id: T::Id,
        action: T::Action,
        ctx: &mut T::Context,
    ) -> Result<T::ActionResult, T::Error> {
        debug!(entity_type = T::NAME, %id, ?action, "Action");
        let mut item = self.read(id)?;
        match item.handle_action(action, ctx) {
            Ok(result) => {
                self.store.insert(id, item);
                info!(entity_type = T::NAME, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type = T::NAME, %id, error = %e, "Action failed");
                Err(e)
            }
        }
    }

    fn insert(&mut self, entity: T) -> Result<T, T::Error> {
        let id = entity.id();
        debug!(entity_type = T::NAME, %id, "Insert");
        self.ensure_vacant(&entity, None)?;
        self.ids.observe(id.into());
        self.store.insert(id, entity.clone());
        info!(entity_type = T::NAME, %id, size = self.store.len(), "Inserted");
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Note, NoteCreate, NoteError, NoteUpdate};

    fn note(title: &str) -> NoteCreate {
        NoteCreate {
            title: title.to_string(),
            slot: None,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = ResourceStore::<Note>::new();
        let a = store.create(note("a")).unwrap();
        let b = store.create(note("b")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.read(1).unwrap(), a);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = ResourceStore::<Note>::new();
        store.create(note("a")).unwrap();
        let b = store.create(note("b")).unwrap();
        store.delete(b.id).unwrap();
        let c = store.create(note("c")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_failed_validation_does_not_consume_id() {
        let mut store = ResourceStore::<Note>::new();
        assert!(matches!(store.create(note("")), Err(NoteError::Invalid(_))));
        assert_eq!(store.create(note("ok")).unwrap().id, 1);
    }

    #[test]
    fn test_rejected_update_leaves_record_unchanged() {
        let mut store = ResourceStore::<Note>::new();
        let created = store.create(note("keep")).unwrap();
        let err = store
            .update(
                created.id,
                NoteUpdate {
                    title: Some(String::new()),
                },
            )
            .unwrap_err();
        assert!(matches!(err, NoteError::Invalid(_)));
        assert_eq!(store.read(created.id).unwrap().title, "keep");
    }

    #[test]
    fn test_unique_key_collision() {
        let mut store = ResourceStore::<Note>::new();
        store.create(note("same")).unwrap();
        let err = store.create(note("same")).unwrap_err();
        assert_eq!(err, NoteError::Exists("same".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_entity_reports_not_found() {
        let mut store = ResourceStore::<Note>::new();
        assert_eq!(store.read(9).unwrap_err(), NoteError::Missing(9));
        assert_eq!(store.delete(9).unwrap_err(), NoteError::Missing(9));
    }

    #[test]
    fn test_preset_id_does_not_advance_sequence() {
        let mut store = ResourceStore::<Note>::new();
        let pinned = store
            .create(NoteCreate {
                title: "pinned".to_string(),
                slot: Some(40),
            })
            .unwrap();
        assert_eq!(pinned.id, 40);
        assert_eq!(store.create(note("next")).unwrap().id, 1);
    }

    #[test]
    fn test_list_keeps_insertion_order_after_delete() {
        let mut store = ResourceStore::<Note>::new();
        for title in ["a", "b", "c"] {
            store.create(note(title)).unwrap();
        }
        store.delete(2).unwrap();
        let titles: Vec<_> = store.list_all().unwrap().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_insert_rejects_duplicate_and_bumps_sequence() {
        let mut store = ResourceStore::<Note>::new();
        let fixed = Note {
            id: 5,
            title: "five".to_string(),
        };
        store.insert(fixed.clone()).unwrap();
        assert_eq!(
            store.insert(fixed).unwrap_err(),
            NoteError::Exists("5".to_string())
        );
        assert_eq!(store.create(note("six")).unwrap().id, 6);
    }

    #[test]
    fn test_reset_ids_rewinds_only_the_counter() {
        let mut store = ResourceStore::<Note>::new();
        store.create(note("a")).unwrap();
        store.delete(1).unwrap();
        store.reset_ids();
        assert_eq!(store.create(note("b")).unwrap().id, 1);
    }
}
