//! # File-Backed Store
//!
//! `DocumentStore<T, F>` is the "Handler" backend. Every call opens the whole document,
//! parses it, scans the records linearly, serializes the full document back when something
//! changed and returns. There is no caching and no locking: one process, one writer.
//!
//! A missing document is an empty collection. A document that cannot be parsed is treated
//! the same way after logging a warning, so the next successful write replaces it.
//!
//! Ids come from the store's own [`IdSequence`], which is pushed past whatever the document
//! already holds before each create and past every id this store deletes or inserts. The
//! counter lives in memory only; a fresh store can reissue a deleted highest id.

use crate::error::{FrameworkError, StorageError};
use crate::format::DocumentFormat;
use crate::persist::Persisted;
use crate::sequence::IdSequence;
use crate::store::EntityStore;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct DocumentStore<T: Persisted, F: DocumentFormat> {
    path: PathBuf,
    resolver: Arc<T::Resolver>,
    ids: IdSequence,
    _format: PhantomData<F>,
}

impl<T: Persisted, F: DocumentFormat> Clone for DocumentStore<T, F> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            resolver: Arc::clone(&self.resolver),
            ids: self.ids.clone(),
            _format: PhantomData,
        }
    }
}

impl<T, F> DocumentStore<T, F>
where
    T: Persisted<Resolver = ()>,
    F: DocumentFormat,
{
    /// Store for an entity that references nothing else.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_resolver(path, Arc::new(()))
    }
}

impl<T: Persisted, F: DocumentFormat> DocumentStore<T, F> {
    /// Store whose records are rebuilt through `resolver` when loaded.
    pub fn with_resolver(path: impl Into<PathBuf>, resolver: Arc<T::Resolver>) -> Self {
        Self {
            path: path.into(),
            resolver,
            ids: IdSequence::new(),
            _format: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. Missing or unreadable documents yield an empty collection.
    fn load(&self) -> Vec<T::Record> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(entity_type = T::NAME, path = %self.path.display(), "No document yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    entity_type = T::NAME,
                    path = %self.path.display(),
                    error = %e,
                    "Unreadable document, starting empty"
                );
                return Vec::new();
            }
        };
        F::decode::<T>(&text).unwrap_or_else(|e| {
            warn!(
                entity_type = T::NAME,
                path = %self.path.display(),
                error = %e,
                "Corrupt document, starting empty"
            );
            Vec::new()
        })
    }

    fn save(&self, records: &[T::Record]) -> Result<(), T::Error> {
        let text = F::encode::<T>(records).map_err(FrameworkError::from)?;
        let write_err = |e: std::io::Error| {
            FrameworkError::from(StorageError::Write {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&self.path, text).map_err(write_err)?;
        debug!(entity_type = T::NAME, path = %self.path.display(), size = records.len(), "Saved");
        Ok(())
    }

    fn position(records: &[T::Record], id: T::Id) -> Result<usize, T::Error> {
        records
            .iter()
            .position(|r| T::record_id(r) == id)
            .ok_or_else(|| {
                warn!(entity_type = T::NAME, %id, "Not found");
                FrameworkError::NotFound {
                    entity: T::NAME,
                    id: id.into(),
                }
                .into()
            })
    }

    /// Reject `record` if another record (other than the one at `skip`) has its id or key.
    fn ensure_vacant(
        records: &[T::Record],
        record: &T::Record,
        skip: Option<usize>,
    ) -> Result<(), T::Error> {
        let id = T::record_id(record);
        let key = T::record_key(record);
        for (idx, other) in records.iter().enumerate() {
            if Some(idx) == skip {
                continue;
            }
            if T::record_id(other) == id {
                warn!(entity_type = T::NAME, %id, "Duplicate id");
                return Err(FrameworkError::AlreadyExists {
                    entity: T::NAME,
                    key: id.to_string(),
                }
                .into());
            }
            if let Some(key) = key.filter(|k| T::record_key(other) == Some(*k)) {
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

    /// `max(count, highest id)`: the last id an append-only document has handed out.
    fn highest_id(records: &[T::Record]) -> u32 {
        let highest = records
            .iter()
            .map(|r| -> u32 { T::record_id(r).into() })
            .max()
            .unwrap_or(0);
        let count = u32::try_from(records.len()).unwrap_or(u32::MAX);
        highest.max(count)
    }

    fn entity(&self, record: T::Record) -> T {
        T::from_record(record, &self.resolver)
    }
}

impl<T: Persisted, F: DocumentFormat> EntityStore<T> for DocumentStore<T, F> {
    fn create_with(&mut self, params: T::Create, ctx: &mut T::Context) -> Result<T, T::Error> {
        debug!(entity_type = T::NAME, ?params, "Create");
        let mut records = self.load();
        let preset = T::preset_id(&params);
        self.ids.observe(Self::highest_id(&records));
        let id = preset.unwrap_or_else(|| T::Id::from(self.ids.peek()));

        let mut item = T::from_create_params(id, params).inspect_err(|e| {
            warn!(entity_type = T::NAME, error = %e, "Create failed");
        })?;
        Self::ensure_vacant(&records, &item.to_record(), None)?;
        item.on_create(ctx).inspect_err(|e| {
            warn!(entity_type = T::NAME, %id, error = %e, "on_create failed");
        })?;

        records.push(item.to_record());
        self.save(&records)?;
        if preset.is_none() {
            self.ids.advance();
        }
        info!(entity_type = T::NAME, %id, size = records.len(), "Created");
        Ok(item)
    }

    fn read(&self, id: T::Id) -> Result<T, T::Error> {
        let mut records = self.load();
        let idx = Self::position(&records, id)?;
        debug!(entity_type = T::NAME, %id, found = true, "Get");
        Ok(self.entity(records.swap_remove(idx)))
    }

    fn update_with(
        &mut self,
        id: T::Id,
        update: T::Update,
        ctx: &mut T::Context,
    ) -> Result<T, T::Error> {
        debug!(entity_type = T::NAME, %id, ?update, "Update");
        let mut records = self.load();
        let idx = Self::position(&records, id)?;
        let mut item = self.entity(records[idx].clone());
        item.on_update(update, ctx).inspect_err(|e| {
            warn!(entity_type = T::NAME, %id, error = %e, "Update failed");
        })?;

        let record = item.to_record();
        Self::ensure_vacant(&records, &record, Some(idx))?;
        records[idx] = record;
        self.save(&records)?;
        info!(entity_type = T::NAME, %id, "Updated");
        Ok(item)
    }

    fn delete_with(&mut self, id: T::Id, ctx: &mut T::Context) -> Result<(), T::Error> {
        debug!(entity_type = T::NAME, %id, "Delete");
        let mut records = self.load();
        let idx = Self::position(&records, id)?;
        let item = self.entity(records[idx].clone());
        item.on_delete(ctx).inspect_err(|e| {
            warn!(entity_type = T::NAME, %id, error = %e, "on_delete failed");
        })?;

        records.remove(idx);
        self.save(&records)?;
        self.ids.observe(id.into());
        info!(entity_type = T::NAME, %id, size = records.len(), "Deleted");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<T>, T::Error> {
        Ok(self
            .load()
            .into_iter()
            .map(|record| self.entity(record))
            .collect())
    }

    fn perform_action_with(
        &mut self,
        id: T::Id,
        action: T::Action,
        ctx: &mut T::Context,
    ) -> Result<T::ActionResult, T::Error> {
        debug!(entity_type = T::NAME, %id, ?action, "Action");
        let mut records = self.load();
        let idx = Self::position(&records, id)?;
        let mut item = self.entity(records[idx].clone());
        let result = item.handle_action(action, ctx).inspect_err(|e| {
            warn!(entity_type = T::NAME, %id, error = %e, "Action failed");
        })?;

        records[idx] = item.to_record();
        self.save(&records)?;
        info!(entity_type = T::NAME, %id, "Action ok");
        Ok(result)
    }

    fn insert(&mut self, entity: T) -> Result<T, T::Error> {
        let id = entity.id();
        debug!(entity_type = T::NAME, %id, "Insert");
        let mut records = self.load();
        let record = entity.to_record();
        Self::ensure_vacant(&records, &record, None)?;

        records.push(record);
        self.save(&records)?;
        self.ids.observe(id.into());
        info!(entity_type = T::NAME, %id, size = records.len(), "Inserted");
        Ok(entity)
    }
}

impl<T: Persisted, F: DocumentFormat> std::fmt::Debug for DocumentStore<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("entity", &T::NAME)
            .field("path", &self.path)
            .field("next_id", &self.ids.peek())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Json, Xml};
    use crate::testing::{Board, Note, NoteAction, NoteCreate, NoteError};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn note(title: &str) -> NoteCreate {
        NoteCreate {
            title: title.to_string(),
            slot: None,
        }
    }

    fn json_store(dir: &TempDir) -> DocumentStore<Note, Json> {
        DocumentStore::open(dir.path().join("notes.json"))
    }

    #[test]
    fn test_missing_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = json_store(&dir);
        assert!(store.list_all().unwrap().is_empty());
        assert_eq!(store.read(1).unwrap_err(), NoteError::Missing(1));
    }

    #[test]
    fn test_create_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let created = json_store(&dir).create(note("kept")).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(json_store(&dir).read(1).unwrap(), created);
    }

    #[test]
    fn test_next_id_skips_past_deleted_records() {
        let dir = TempDir::new().unwrap();
        let mut store = json_store(&dir);
        for title in ["a", "b", "c"] {
            store.create(note(title)).unwrap();
        }
        store.delete(1).unwrap();
        assert_eq!(store.create(note("d")).unwrap().id, 4);
    }

    #[test]
    fn test_deleted_highest_id_is_not_reissued() {
        let dir = TempDir::new().unwrap();
        let mut store = json_store(&dir);
        for title in ["a", "b", "c"] {
            store.create(note(title)).unwrap();
        }
        store.delete(3).unwrap();
        assert_eq!(store.create(note("d")).unwrap().id, 4);

        let mut other = json_store(&dir);
        other.delete(4).unwrap();
        assert_eq!(other.create(note("e")).unwrap().id, 5);
    }

    #[test]
    fn test_failed_create_does_not_consume_id() {
        let dir = TempDir::new().unwrap();
        let mut store = json_store(&dir);
        store.create(note("a")).unwrap();
        assert!(store.create(note("a")).is_err());
        assert_eq!(store.create(note("b")).unwrap().id, 2);
    }

    #[test]
    fn test_insert_duplicate_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let mut store = json_store(&dir);
        let first = Note {
            id: 3,
            title: "three".to_string(),
        };
        store.insert(first.clone()).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let err = store
            .insert(Note {
                id: 3,
                title: "other".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, NoteError::Exists("3".to_string()));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_corrupt_document_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let mut store = json_store(&dir);
        fs::write(store.path(), "{ broken").unwrap();
        assert!(store.list_all().unwrap().is_empty());
        store.create(note("fresh")).unwrap();
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_action_does_not_write() {
        let dir = TempDir::new().unwrap();
        let mut store = json_store(&dir);
        let created = store.create(note("named")).unwrap();
        assert!(store
            .perform_action(created.id, NoteAction::Rename(" ".to_string()))
            .is_err());
        assert_eq!(store.read(created.id).unwrap().title, "named");

        let previous = store
            .perform_action(created.id, NoteAction::Rename("renamed".to_string()))
            .unwrap();
        assert_eq!(previous, "named");
        assert_eq!(store.read(created.id).unwrap().title, "renamed");
    }

    #[test]
    fn test_update_rejects_key_taken_by_other_record() {
        let dir = TempDir::new().unwrap();
        let mut store: DocumentStore<Note, Xml> = DocumentStore::open(dir.path().join("notes.xml"));
        store.create(note("a")).unwrap();
        let b = store.create(note("b")).unwrap();
        let err = store
            .update(
                b.id,
                crate::testing::NoteUpdate {
                    title: Some("a".to_string()),
                },
            )
            .unwrap_err();
        assert_eq!(err, NoteError::Exists("a".to_string()));
        assert_eq!(store.read(b.id).unwrap().title, "b");
    }

    #[test]
    fn test_resolver_drops_unknown_references() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boards.xml");
        let mut writer: DocumentStore<Board, Xml> =
            DocumentStore::with_resolver(&path, Arc::from(vec![1, 2, 3]));
        writer.create(vec![1, 2, 3]).unwrap();

        let reader: DocumentStore<Board, Xml> =
            DocumentStore::with_resolver(&path, Arc::from(vec![1, 3]));
        assert_eq!(reader.read(1).unwrap().pinned, vec![1, 3]);
    }
}
