use crate::model::{AddressId, UserId};
use serde::{Deserialize, Serialize};

/// A postal address belonging to one user.
///
/// # Store Framework
/// Implements [`StoreEntity`](store_framework::StoreEntity); see
/// [`address::entity`](crate::address::entity) for validation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "address_id")]
    pub id: AddressId,
    pub user_id: UserId,
    pub city: String,
    pub street: String,
    pub house: String,
    #[serde(default)]
    pub apartment: String,
}

/// Payload for creating a new address.
#[derive(Debug, Clone)]
pub struct AddressCreate {
    pub user_id: UserId,
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: String,
}

/// Payload for updating an existing address.
#[derive(Debug, Clone, Default)]
pub struct AddressUpdate {
    pub city: Option<String>,
    pub street: Option<String>,
    pub house: Option<String>,
    pub apartment: Option<String>,
}

/// Represents a registered user.
///
/// # Store Framework
/// Implements [`StoreEntity`](store_framework::StoreEntity). The email is the unique key
/// within a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub address: Option<Address>,
}

impl UserCreate {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            phone: String::new(),
            address: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}
