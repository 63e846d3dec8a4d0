//! Small entities used by the framework's own unit tests.

use crate::entity::StoreEntity;
use crate::error::{FrameworkError, StorageError};
use crate::persist::Persisted;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoteError {
    #[error("invalid note: {0}")]
    Invalid(String),
    #[error("note exists: {0}")]
    Exists(String),
    #[error("note {0} missing")]
    Missing(u32),
    #[error(transparent)]
    Storage(StorageError),
}

impl From<FrameworkError> for NoteError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { id, .. } => Self::Missing(id),
            FrameworkError::AlreadyExists { key, .. } => Self::Exists(key),
            FrameworkError::Storage(e) => Self::Storage(e),
        }
    }
}

/// Titles are unique within a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "note_id")]
    pub id: u32,
    pub title: String,
}

#[derive(Debug)]
pub struct NoteCreate {
    pub title: String,
    /// Pin the note to a fixed id instead of the next one.
    pub slot: Option<u32>,
}

#[derive(Debug)]
pub struct NoteUpdate {
    pub title: Option<String>,
}

#[derive(Debug)]
pub enum NoteAction {
    Rename(String),
}

fn checked_title(title: String) -> Result<String, NoteError> {
    if title.trim().is_empty() {
        return Err(NoteError::Invalid("title must not be empty".to_string()));
    }
    Ok(title)
}

impl StoreEntity for Note {
    type Id = u32;
    type Create = NoteCreate;
    type Update = NoteUpdate;
    type Action = NoteAction;
    type ActionResult = String;
    type Context = ();
    type Error = NoteError;

    const NAME: &'static str = "Note";

    fn id(&self) -> u32 {
        self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn preset_id(params: &NoteCreate) -> Option<u32> {
        params.slot
    }

    fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
        Ok(Self {
            id,
            title: checked_title(params.title)?,
        })
    }

    fn on_update(&mut self, update: NoteUpdate, _ctx: &mut ()) -> Result<(), NoteError> {
        if let Some(title) = update.title {
            self.title = checked_title(title)?;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: NoteAction, _ctx: &mut ()) -> Result<String, NoteError> {
        match action {
            NoteAction::Rename(title) => {
                let previous = std::mem::replace(&mut self.title, checked_title(title)?);
                Ok(previous)
            }
        }
    }
}

impl Persisted for Note {
    const COLLECTION: &'static str = "notes";
    const ELEMENT: &'static str = "note";
    type Record = Note;
    type XmlRecord = Note;
    type Resolver = ();

    fn record_id(record: &Note) -> u32 {
        record.id
    }

    fn record_key(record: &Note) -> Option<&str> {
        Some(&record.title)
    }

    fn to_record(&self) -> Note {
        self.clone()
    }

    fn from_record(record: Note, _resolver: &()) -> Self {
        record
    }
}

/// A board pins notes by id. Loading drops pins the resolver does not know.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub id: u32,
    pub pinned: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub board_id: u32,
    pub pinned: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardXml {
    pub board_id: u32,
    pub pinned: PinList,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PinList {
    #[serde(rename = "note", default)]
    pub items: Vec<u32>,
}

impl From<BoardRecord> for BoardXml {
    fn from(r: BoardRecord) -> Self {
        Self {
            board_id: r.board_id,
            pinned: PinList { items: r.pinned },
        }
    }
}

impl From<BoardXml> for BoardRecord {
    fn from(x: BoardXml) -> Self {
        Self {
            board_id: x.board_id,
            pinned: x.pinned.items,
        }
    }
}

impl StoreEntity for Board {
    type Id = u32;
    type Create = Vec<u32>;
    type Update = Vec<u32>;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = NoteError;

    const NAME: &'static str = "Board";

    fn id(&self) -> u32 {
        self.id
    }

    fn from_create_params(id: u32, pinned: Vec<u32>) -> Result<Self, NoteError> {
        Ok(Self { id, pinned })
    }

    fn on_update(&mut self, pinned: Vec<u32>, _ctx: &mut ()) -> Result<(), NoteError> {
        self.pinned = pinned;
        Ok(())
    }

    fn handle_action(&mut self, _action: (), _ctx: &mut ()) -> Result<(), NoteError> {
        Ok(())
    }
}

impl Persisted for Board {
    const COLLECTION: &'static str = "boards";
    const ELEMENT: &'static str = "board";
    type Record = BoardRecord;
    type XmlRecord = BoardXml;
    type Resolver = [u32];

    fn record_id(record: &BoardRecord) -> u32 {
        record.board_id
    }

    fn to_record(&self) -> BoardRecord {
        BoardRecord {
            board_id: self.id,
            pinned: self.pinned.clone(),
        }
    }

    fn from_record(record: BoardRecord, known: &[u32]) -> Self {
        Self {
            id: record.board_id,
            pinned: record
                .pinned
                .into_iter()
                .filter(|id| known.contains(id))
                .collect(),
        }
    }
}
