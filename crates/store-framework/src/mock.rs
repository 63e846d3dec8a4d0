//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` implements the same [`EntityStore<T>`] contract as the real stores but
//! keeps no state: it answers each call from a queue of expectations. Wrap it in a typed
//! manager to test the manager's own logic (result mapping, filtering, validation order)
//! deterministically, and to inject failures such as a storage error that is awkward to
//! provoke with a real file.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | ResourceStore / DocumentStore |
//! |---------|-----------|-------------------------------|
//! | **State** | None (expectations) | Real records |
//! | **Use Case** | Logic *around* the store | The entity hooks or full flows |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//!
//! ## Example
//!
//! ```rust
//! use store_framework::mock::MockStore;
//! use store_framework::{EntityStore, FrameworkError, StoreEntity};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tag { id: u32 }
//! #[derive(Debug)] enum TagAction {}
//! #[derive(Debug, PartialEq, thiserror::Error)] #[error("tag error")] struct TagError;
//! impl From<FrameworkError> for TagError { fn from(_: FrameworkError) -> Self { TagError } }
//!
//! impl StoreEntity for Tag {
//!     type Id = u32; type Create = (); type Update = (); type Action = TagAction;
//!     type ActionResult = (); type Context = (); type Error = TagError;
//!     const NAME: &'static str = "Tag";
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, TagError> { Ok(Self { id }) }
//!     fn on_update(&mut self, _: (), _: &mut ()) -> Result<(), TagError> { Ok(()) }
//!     fn handle_action(&mut self, a: TagAction, _: &mut ()) -> Result<(), TagError> { match a {} }
//! }
//!
//! let mut mock = MockStore::<Tag>::new();
//! mock.expect_read(1).return_ok(Tag { id: 1 });
//! mock.expect_read(2).return_err(TagError);
//!
//! assert_eq!(mock.read(1), Ok(Tag { id: 1 }));
//! assert_eq!(mock.read(2), Err(TagError));
//! mock.verify();
//! ```

use crate::entity::StoreEntity;
use crate::store::EntityStore;
use std::cell::RefCell;
use std::collections::VecDeque;

/// An expected call and the response it produces.
enum Expectation<T: StoreEntity> {
    Create { response: Result<T, T::Error> },
    Read { id: T::Id, response: Result<T, T::Error> },
    Update { id: T::Id, response: Result<T, T::Error> },
    Delete { id: T::Id, response: Result<(), T::Error> },
    List { response: Result<Vec<T>, T::Error> },
    Action { id: T::Id, response: Result<T::ActionResult, T::Error> },
    Insert { response: Result<T, T::Error> },
}

impl<T: StoreEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Read { .. } => "read",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::List { .. } => "list_all",
            Self::Action { .. } => "perform_action",
            Self::Insert { .. } => "insert",
        }
    }
}

/// A store that replays queued expectations in order.
pub struct MockStore<T: StoreEntity> {
    expectations: RefCell<VecDeque<Expectation<T>>>,
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockStore<T> {
    pub fn new() -> Self {
        Self {
            expectations: RefCell::new(VecDeque::new()),
        }
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, |response| Expectation::Create { response })
    }

    pub fn expect_read(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, move |response| Expectation::Read { id, response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, ()> {
        ExpectationBuilder::new(self, move |response| Expectation::Delete { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<'_, T, Vec<T>> {
        ExpectationBuilder::new(self, |response| Expectation::List { response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder::new(self, move |response| Expectation::Action { id, response })
    }

    pub fn expect_insert(&mut self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, |response| Expectation::Insert { response })
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.borrow().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn next(&self, call: &str) -> Expectation<T> {
        match self.expectations.borrow_mut().pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected {call}: no expectations left"),
        }
    }
}

fn mismatch<T: StoreEntity>(call: &str, got: &Expectation<T>) -> ! {
    panic!("Unexpected {call}: next expectation is {}", got.name())
}

fn check_id<I: PartialEq + std::fmt::Debug>(call: &str, expected: I, actual: I) {
    assert_eq!(expected, actual, "{call} called with an unexpected id");
}

/// Queues one expectation returning `R`.
pub struct ExpectationBuilder<'a, T: StoreEntity, R> {
    mock: &'a mut MockStore<T>,
    make: Box<dyn FnOnce(Result<R, T::Error>) -> Expectation<T> + 'a>,
}

impl<'a, T: StoreEntity, R> ExpectationBuilder<'a, T, R> {
    fn new(
        mock: &'a mut MockStore<T>,
        make: impl FnOnce(Result<R, T::Error>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            make: Box::new(make),
        }
    }

    pub fn return_ok(self, value: R) {
        self.queue(Ok(value));
    }

    pub fn return_err(self, error: T::Error) {
        self.queue(Err(error));
    }

    fn queue(self, response: Result<R, T::Error>) {
        let expectation = (self.make)(response);
        self.mock.expectations.get_mut().push_back(expectation);
    }
}

impl<T: StoreEntity> EntityStore<T> for MockStore<T> {
    fn create_with(&mut self, _params: T::Create, _ctx: &mut T::Context) -> Result<T, T::Error> {
        match self.next("create") {
            Expectation::Create { response } => response,
            other => mismatch("create", &other),
        }
    }

    fn read(&self, id: T::Id) -> Result<T, T::Error> {
        match self.next("read") {
            Expectation::Read {
                id: expected,
                response,
            } => {
                check_id("read", expected, id);
                response
            }
            other => mismatch("read", &other),
        }
    }

    fn update_with(
        &mut self,
        id: T::Id,
        _update: T::Update,
        _ctx: &mut T::Context,
    ) -> Result<T, T::Error> {
        match self.next("update") {
            Expectation::Update {
                id: expected,
                response,
            } => {
                check_id("update", expected, id);
                response
            }
            other => mismatch("update", &other),
        }
    }

    fn delete_with(&mut self, id: T::Id, _ctx: &mut T::Context) -> Result<(), T::Error> {
        match self.next("delete") {
            Expectation::Delete {
                id: expected,
                response,
            } => {
                check_id("delete", expected, id);
                response
            }
            other => mismatch("delete", &other),
        }
    }

    fn list_all(&self) -> Result<Vec<T>, T::Error> {
        match self.next("list_all") {
            Expectation::List { response } => response,
            other => mismatch("list_all", &other),
        }
    }

    fn perform_action_with(
        &mut self,
        id: T::Id,
        _action: T::Action,
        _ctx: &mut T::Context,
    ) -> Result<T::ActionResult, T::Error> {
        match self.next("perform_action") {
            Expectation::Action {
                id: expected,
                response,
            } => {
                check_id("perform_action", expected, id);
                response
            }
            other => mismatch("perform_action", &other),
        }
    }

    fn insert(&mut self, _entity: T) -> Result<T, T::Error> {
        match self.next("insert") {
            Expectation::Insert { response } => response,
            other => mismatch("insert", &other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Note, NoteCreate, NoteError};

    fn sample() -> Note {
        Note {
            id: 1,
            title: "mocked".to_string(),
        }
    }

    #[test]
    fn test_mock_store_with_expectations() {
        let mut mock = MockStore::<Note>::new();
        mock.expect_create().return_ok(sample());
        mock.expect_read(1).return_ok(sample());

        let created = mock
            .create(NoteCreate {
                title: "ignored".to_string(),
                slot: None,
            })
            .unwrap();
        assert_eq!(created, sample());
        assert_eq!(mock.read(1).unwrap().title, "mocked");
        mock.verify();
    }

    #[test]
    fn test_mock_store_injects_errors() {
        let mut mock = MockStore::<Note>::new();
        mock.expect_delete(4).return_err(NoteError::Missing(4));
        assert_eq!(mock.delete(4), Err(NoteError::Missing(4)));
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_leftover_expectations() {
        let mut mock = MockStore::<Note>::new();
        mock.expect_list().return_ok(vec![]);
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "unexpected id")]
    fn test_read_with_wrong_id_panics() {
        let mut mock = MockStore::<Note>::new();
        mock.expect_read(1).return_ok(sample());
        let _ = mock.read(2);
    }
}
