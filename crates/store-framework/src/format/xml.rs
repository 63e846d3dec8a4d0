use super::DocumentFormat;
use crate::error::StorageError;
use crate::persist::Persisted;
use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use serde::de::{DeserializeOwned, DeserializeSeed, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// `<collection><element>...</element>...</collection>` with an XML declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xml;

impl DocumentFormat for Xml {
    const EXTENSION: &'static str = "xml";

    fn decode<T: Persisted>(text: &str) -> Result<Vec<T::Record>, StorageError> {
        let mut de = quick_xml::de::Deserializer::from_str(text);
        let records = Records::<T::XmlRecord> {
            collection: T::COLLECTION,
            element: T::ELEMENT,
            _record: PhantomData,
        }
        .deserialize(&mut de)
        .map_err(|e| StorageError::Decode {
            collection: T::COLLECTION,
            message: e.to_string(),
        })?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    fn encode<T: Persisted>(records: &[T::Record]) -> Result<String, StorageError> {
        let mirrored: Vec<T::XmlRecord> = records.iter().cloned().map(Into::into).collect();
        let collection = Collection {
            name: T::COLLECTION,
            element: T::ELEMENT,
            records: &mirrored,
        };

        let mut body = String::new();
        let mut ser = quick_xml::se::Serializer::new(&mut body);
        ser.indent(' ', 4);
        let encode_err = |message: String| StorageError::Encode {
            collection: T::COLLECTION,
            message,
        };
        collection
            .serialize(ser)
            .map_err(|e| encode_err(e.to_string()))?;
        let body = pin_edge_whitespace(&body).map_err(encode_err)?;
        Ok(format!("{DECLARATION}{body}\n"))
    }
}

fn is_xml_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn char_refs(raw: &str) -> String {
    raw.chars().map(|c| format!("&#{};", u32::from(c))).collect()
}

/// Rewrites leading and trailing whitespace of every leaf value as character references.
///
/// The deserializer trims raw text before unescaping, so `<name>  a </name>` would read
/// back as `a` while `<name>&#32;&#32;a&#32;</name>` reads back unchanged. Indentation
/// between elements is left alone.
fn pin_edge_whitespace(body: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(body);
    let mut events = Vec::new();
    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Eof => break,
            event => events.push(event),
        }
    }

    let mut writer = Writer::new(Vec::new());
    for (idx, event) in events.iter().enumerate() {
        let leaf = idx > 0
            && matches!(events[idx - 1], Event::Start(_))
            && matches!(events.get(idx + 1), Some(Event::End(_)));
        let event = match event {
            Event::Text(text) if leaf => {
                let raw = std::str::from_utf8(text).map_err(|e| e.to_string())?;
                let inner = raw.trim_matches(is_xml_space);
                let start = raw.len() - raw.trim_start_matches(is_xml_space).len();
                let pinned = if inner.is_empty() {
                    char_refs(raw)
                } else {
                    format!(
                        "{}{inner}{}",
                        char_refs(&raw[..start]),
                        char_refs(&raw[start + inner.len()..])
                    )
                };
                Event::Text(BytesText::from_escaped(pinned))
            }
            other => other.clone(),
        };
        writer.write_event(event).map_err(|e| e.to_string())?;
    }
    String::from_utf8(writer.into_inner()).map_err(|e| e.to_string())
}

/// Root element named after the collection with one child per record.
struct Collection<'a, R> {
    name: &'static str,
    element: &'static str,
    records: &'a [R],
}

impl<R: Serialize> Serialize for Collection<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut root = serializer.serialize_struct(self.name, 1)?;
        root.serialize_field(self.element, self.records)?;
        root.end()
    }
}

/// Collects the `element` children of the root, ignoring anything else.
struct Records<R> {
    collection: &'static str,
    element: &'static str,
    _record: PhantomData<R>,
}

impl<'de, R: DeserializeOwned> DeserializeSeed<'de> for Records<R> {
    type Value = Vec<R>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Vec<R>, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, R: DeserializeOwned> Visitor<'de> for Records<R> {
    type Value = Vec<R>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a <{}> document", self.collection)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Vec<R>, A::Error> {
        let mut records = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key == self.element {
                records.extend(map.next_value::<Vec<R>>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(records)
    }
}
