use serde::{Deserialize, Serialize};
use store_framework::{
    DocumentStore, EntityStore, FrameworkError, Json, Persisted, ResourceStore, StoreEntity, Xml,
};
use tempfile::TempDir;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SimpleUser {
    #[serde(rename = "user_id")]
    id: u32,
    name: String,
    is_admin: bool,
}

#[derive(Debug)]
struct SimpleUserCreate {
    name: String,
}

#[derive(Debug)]
struct SimpleUserUpdate {
    name: Option<String>,
}

#[derive(Debug)]
enum UserAction {
    PromoteToAdmin,
    #[allow(dead_code)]
    Rename(String),
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum SimpleUserError {
    #[error("not found: {0}")]
    NotFound(u32),
    #[error("framework: {0}")]
    Framework(String),
}

impl From<FrameworkError> for SimpleUserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { id, .. } => Self::NotFound(id),
            other => Self::Framework(other.to_string()),
        }
    }
}

impl StoreEntity for SimpleUser {
    type Id = u32;
    type Create = SimpleUserCreate;
    type Update = SimpleUserUpdate;
    type Action = UserAction;
    type ActionResult = bool;
    type Context = ();
    type Error = SimpleUserError;

    const NAME: &'static str = "SimpleUser";

    fn id(&self) -> u32 {
        self.id
    }

    fn from_create_params(id: u32, params: SimpleUserCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            is_admin: false,
        })
    }

    fn on_update(&mut self, update: SimpleUserUpdate, _ctx: &mut ()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: UserAction, _ctx: &mut ()) -> Result<bool, Self::Error> {
        match action {
            UserAction::PromoteToAdmin => {
                if self.is_admin {
                    Ok(false)
                } else {
                    self.is_admin = true;
                    Ok(true)
                }
            }
            UserAction::Rename(new_name) => {
                self.name = new_name;
                Ok(true)
            }
        }
    }
}

impl Persisted for SimpleUser {
    const COLLECTION: &'static str = "users";
    const ELEMENT: &'static str = "user";
    type Record = SimpleUser;
    type XmlRecord = SimpleUser;
    type Resolver = ();

    fn record_id(record: &SimpleUser) -> u32 {
        record.id
    }

    fn to_record(&self) -> SimpleUser {
        self.clone()
    }

    fn from_record(record: SimpleUser, _resolver: &()) -> Self {
        record
    }
}

// --- Test ---

/// The same lifecycle must hold for every backend.
fn full_lifecycle(store: &mut impl EntityStore<SimpleUser>) {
    // 1. Create
    let user = store
        .create(SimpleUserCreate {
            name: "Alice".into(),
        })
        .unwrap();
    assert_eq!(user.id, 1); // First ID should be 1

    // 2. Perform Action: Promote
    assert!(store.perform_action(user.id, UserAction::PromoteToAdmin).unwrap());
    assert!(store.read(user.id).unwrap().is_admin);

    // 3. Promote again (should return false)
    assert!(!store.perform_action(user.id, UserAction::PromoteToAdmin).unwrap());

    // 4. Update
    let updated = store
        .update(
            user.id,
            SimpleUserUpdate {
                name: Some("Bob".into()),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Bob");
    assert_eq!(store.read(user.id).unwrap(), updated);

    // 5. Delete, keeping a later record around
    let carol = store
        .create(SimpleUserCreate {
            name: "Carol".into(),
        })
        .unwrap();
    assert_eq!(carol.id, 2);
    store.delete(user.id).unwrap();
    assert_eq!(
        store.read(user.id).unwrap_err(),
        SimpleUserError::NotFound(1)
    );
    assert_eq!(store.delete(user.id).unwrap_err(), SimpleUserError::NotFound(1));

    // 6. Ids are not reused
    let dave = store
        .create(SimpleUserCreate {
            name: "Dave".into(),
        })
        .unwrap();
    assert_eq!(dave.id, 3);
    let names: Vec<_> = store.list_all().unwrap().into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["Carol", "Dave"]);
}

#[test]
fn test_framework_full_lifecycle_in_memory() {
    full_lifecycle(&mut ResourceStore::new());
}

#[test]
fn test_framework_full_lifecycle_json_document() {
    let dir = TempDir::new().unwrap();
    let mut store = DocumentStore::<SimpleUser, Json>::open(dir.path().join("users.json"));
    full_lifecycle(&mut store);

    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with("{\n    \"users\": ["));
}

#[test]
fn test_framework_full_lifecycle_xml_document() {
    let dir = TempDir::new().unwrap();
    let mut store = DocumentStore::<SimpleUser, Xml>::open(dir.path().join("data/users.xml"));
    full_lifecycle(&mut store);

    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("<users>"));
    assert!(text.contains("<name>Carol</name>"));
}
