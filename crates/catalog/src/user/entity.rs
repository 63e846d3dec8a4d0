//! Entity trait implementation for the User domain type.
//!
//! The email doubles as the user's unique key, so both stores refuse a second user with
//! an email that is already registered.

use super::error::UserError;
use crate::error::require_text;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use store_framework::{Persisted, StoreEntity};

impl StoreEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    const NAME: &'static str = "User";

    fn id(&self) -> UserId {
        self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        require_text("email", &params.email).map_err(UserError::Validation)?;
        Ok(Self {
            id,
            email: params.email,
            name: params.name,
            phone: params.phone,
            address: params.address,
        })
    }

    fn on_update(&mut self, update: UserUpdate, _ctx: &mut ()) -> Result<(), UserError> {
        if let Some(email) = update.email {
            require_text("email", &email).map_err(UserError::Validation)?;
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: (), _ctx: &mut ()) -> Result<(), UserError> {
        Ok(())
    }
}

impl Persisted for User {
    const COLLECTION: &'static str = "users";
    const ELEMENT: &'static str = "user";
    type Record = User;
    type XmlRecord = User;
    type Resolver = ();

    fn record_id(record: &User) -> UserId {
        record.id
    }

    fn record_key(record: &User) -> Option<&str> {
        Some(&record.email)
    }

    fn to_record(&self) -> User {
        self.clone()
    }

    fn from_record(record: User, _resolver: &()) -> Self {
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_framework::{EntityStore, ResourceStore};

    #[test]
    fn test_email_is_required() {
        let result = User::from_create_params(UserId(1), UserCreate::new("", "Alice"));
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[test]
    fn test_name_and_phone_are_optional() {
        let user = User::from_create_params(UserId(1), UserCreate::new("a@example.com", ""))
            .unwrap();
        assert!(user.name.is_empty());
        assert!(user.phone.is_empty());
        assert_eq!(user.address, None);
    }

    #[test]
    fn test_store_rejects_taken_email() {
        let mut store = ResourceStore::<User>::new();
        store.create(UserCreate::new("a@example.com", "Alice")).unwrap();
        let err = store
            .create(UserCreate::new("a@example.com", "Alicia"))
            .unwrap_err();
        assert_eq!(err, UserError::AlreadyExists("a@example.com".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_keeps_email_when_blank_rejected() {
        let mut user =
            User::from_create_params(UserId(1), UserCreate::new("a@example.com", "Alice")).unwrap();
        let update = UserUpdate {
            email: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(user.on_update(update, &mut ()).is_err());
        assert_eq!(user.email, "a@example.com");
    }
}
