//! Managers for users and their addresses.

use crate::address::AddressError;
use crate::model::{
    Address, AddressCreate, AddressId, AddressUpdate, User, UserCreate, UserId, UserUpdate,
};
use crate::user::UserError;
use store_framework::{EntityStore, Manager, ResourceStore};
use tracing::{debug, instrument};

/// Manager for users, in memory by default.
#[derive(Debug, Default)]
pub struct UserManager<S = ResourceStore<User>> {
    store: S,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<User>> Manager<User> for UserManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<User>> UserManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Registers a user. Fails with `AlreadyExists` when the email is taken.
    #[instrument(skip(self))]
    pub fn create_user(&mut self, params: UserCreate) -> Result<User, UserError> {
        debug!("Creating user");
        self.store.create(params)
    }

    #[instrument(skip(self))]
    pub fn update_user(&mut self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        self.store.update(id, update)
    }

    #[instrument(skip(self))]
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .store
            .find_where(|user: &User| user.email == email)?
            .into_iter()
            .next())
    }
}

/// Manager for addresses, in memory by default.
#[derive(Debug, Default)]
pub struct AddressManager<S = ResourceStore<Address>> {
    store: S,
}

impl AddressManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Address>> Manager<Address> for AddressManager<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: EntityStore<Address>> AddressManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn create_address(&mut self, params: AddressCreate) -> Result<Address, AddressError> {
        self.store.create(params)
    }

    #[instrument(skip(self))]
    pub fn update_address(
        &mut self,
        id: AddressId,
        update: AddressUpdate,
    ) -> Result<Address, AddressError> {
        self.store.update(id, update)
    }

    /// Every address owned by `user_id`, in creation order.
    #[instrument(skip(self))]
    pub fn user_addresses(&self, user_id: UserId) -> Result<Vec<Address>, AddressError> {
        self.store.find_where(|a: &Address| a.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home(user_id: u32, city: &str) -> AddressCreate {
        AddressCreate {
            user_id: UserId(user_id),
            city: city.to_string(),
            street: "Main".to_string(),
            house: "1".to_string(),
            apartment: String::new(),
        }
    }

    #[test]
    fn test_find_by_email() {
        let mut users = UserManager::new();
        let alice = users
            .create_user(UserCreate::new("alice@example.com", "Alice"))
            .unwrap();
        users
            .create_user(UserCreate::new("bob@example.com", "Bob"))
            .unwrap();

        assert_eq!(users.find_by_email("alice@example.com"), Ok(Some(alice)));
        assert_eq!(users.find_by_email("carol@example.com"), Ok(None));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut users = UserManager::new();
        let first = users.create_user(UserCreate::new("a@x.io", "A")).unwrap();
        users.delete(first.id).unwrap();
        let second = users.create_user(UserCreate::new("b@x.io", "B")).unwrap();
        assert_eq!(second.id, UserId(2));
        assert_eq!(users.read(first.id), Err(UserError::NotFound(first.id)));
    }

    #[test]
    fn test_user_addresses_filters_by_owner() {
        let mut addresses = AddressManager::new();
        addresses.create_address(home(1, "Kyiv")).unwrap();
        addresses.create_address(home(2, "Lviv")).unwrap();
        addresses.create_address(home(1, "Dnipro")).unwrap();

        let cities: Vec<_> = addresses
            .user_addresses(UserId(1))
            .unwrap()
            .into_iter()
            .map(|a| a.city)
            .collect();
        assert_eq!(cities, ["Kyiv", "Dnipro"]);
    }
}
