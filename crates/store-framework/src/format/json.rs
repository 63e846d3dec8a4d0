use super::DocumentFormat;
use crate::error::StorageError;
use crate::persist::Persisted;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// `{"<collection>": [record, ...]}`, pretty printed with a four-space indent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl DocumentFormat for Json {
    const EXTENSION: &'static str = "json";

    fn decode<T: Persisted>(text: &str) -> Result<Vec<T::Record>, StorageError> {
        let decode_err = |e: serde_json::Error| StorageError::Decode {
            collection: T::COLLECTION,
            message: e.to_string(),
        };
        let mut doc: Map<String, Value> = serde_json::from_str(text).map_err(decode_err)?;
        match doc.remove(T::COLLECTION) {
            Some(records) => serde_json::from_value(records).map_err(decode_err),
            None => Ok(Vec::new()),
        }
    }

    fn encode<T: Persisted>(records: &[T::Record]) -> Result<String, StorageError> {
        let encode_err = |e: serde_json::Error| StorageError::Encode {
            collection: T::COLLECTION,
            message: e.to_string(),
        };
        let mut doc = Map::new();
        doc.insert(
            T::COLLECTION.to_string(),
            serde_json::to_value(records).map_err(encode_err)?,
        );

        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        doc.serialize(&mut ser).map_err(encode_err)?;
        String::from_utf8(out).map_err(|e| StorageError::Encode {
            collection: T::COLLECTION,
            message: e.to_string(),
        })
    }
}
