//! Document encodings understood by [`DocumentStore`](crate::DocumentStore).
//!
//! A format turns the full list of records of one collection into the text of a document
//! and back. Both formats wrap the records in a collection named after
//! [`Persisted::COLLECTION`].

mod json;
mod xml;

pub use json::Json;
pub use xml::Xml;

use crate::error::StorageError;
use crate::persist::Persisted;

pub trait DocumentFormat {
    /// File extension without the dot.
    const EXTENSION: &'static str;

    fn decode<T: Persisted>(text: &str) -> Result<Vec<T::Record>, StorageError>;

    fn encode<T: Persisted>(records: &[T::Record]) -> Result<String, StorageError>;
}
