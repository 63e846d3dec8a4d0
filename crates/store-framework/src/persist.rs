//! # Persisted Records
//!
//! Entities stored in documents are converted to a serializable record first. Flat entities
//! use themselves as the record. Entities that point at other entities keep only the
//! referenced ids in the record and rebuild the references through a `Resolver` when loaded.
//!
//! XML cannot express a bare list field the way JSON does, so every entity also names an
//! `XmlRecord` mirror (identical to `Record` for flat entities) which wraps nested lists in a
//! container element.

use crate::entity::StoreEntity;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// An entity that can be written to and read back from a document.
pub trait Persisted: StoreEntity {
    /// Top-level key (JSON) or root element (XML) holding the records.
    const COLLECTION: &'static str;

    /// XML element name of a single record.
    const ELEMENT: &'static str;

    type Record: Serialize + DeserializeOwned + Clone + Debug;

    type XmlRecord: Serialize + DeserializeOwned + From<Self::Record> + Into<Self::Record>;

    /// Lookup used to rebuild references while loading. `()` for flat entities.
    type Resolver: ?Sized;

    fn record_id(record: &Self::Record) -> Self::Id;

    /// Unique secondary key carried by the record, checked on insert.
    fn record_key(_record: &Self::Record) -> Option<&str> {
        None
    }

    fn to_record(&self) -> Self::Record;

    /// Rebuild the entity. References the resolver no longer knows are dropped.
    fn from_record(record: Self::Record, resolver: &Self::Resolver) -> Self;
}
