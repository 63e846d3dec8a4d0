//! Entity trait implementation for the Address domain type.

use super::error::AddressError;
use crate::error::require_text;
use crate::model::{Address, AddressCreate, AddressId, AddressUpdate};
use store_framework::{Persisted, StoreEntity};

fn required(field: &str, value: &str) -> Result<(), AddressError> {
    require_text(field, value).map_err(AddressError::Validation)
}

impl StoreEntity for Address {
    type Id = AddressId;
    type Create = AddressCreate;
    type Update = AddressUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = AddressError;

    const NAME: &'static str = "Address";

    fn id(&self) -> AddressId {
        self.id
    }

    /// City, street and house are required; the apartment may be blank.
    fn from_create_params(id: AddressId, params: AddressCreate) -> Result<Self, AddressError> {
        required("city", &params.city)?;
        required("street", &params.street)?;
        required("house", &params.house)?;
        Ok(Self {
            id,
            user_id: params.user_id,
            city: params.city,
            street: params.street,
            house: params.house,
            apartment: params.apartment,
        })
    }

    fn on_update(&mut self, update: AddressUpdate, _ctx: &mut ()) -> Result<(), AddressError> {
        if let Some(city) = update.city {
            required("city", &city)?;
            self.city = city;
        }
        if let Some(street) = update.street {
            required("street", &street)?;
            self.street = street;
        }
        if let Some(house) = update.house {
            self.house = house;
        }
        if let Some(apartment) = update.apartment {
            self.apartment = apartment;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: (), _ctx: &mut ()) -> Result<(), AddressError> {
        Ok(())
    }
}

impl Persisted for Address {
    const COLLECTION: &'static str = "addresses";
    const ELEMENT: &'static str = "address";
    type Record = Address;
    type XmlRecord = Address;
    type Resolver = ();

    fn record_id(record: &Address) -> AddressId {
        record.id
    }

    fn to_record(&self) -> Address {
        self.clone()
    }

    fn from_record(record: Address, _resolver: &()) -> Self {
        record
    }
}
