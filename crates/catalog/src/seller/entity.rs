//! Entity trait implementation for the Seller domain type.

use super::actions::{SellerAction, SellerActionResult};
use super::error::SellerError;
use super::record::{SellerRecord, SellerXml};
use crate::error::require_text;
use crate::ledger::ProductLookup;
use crate::model::{Inventory, Seller, SellerCreate, SellerId, SellerUpdate};
use crate::records::retain_known;
use store_framework::{Persisted, StoreEntity};

impl StoreEntity for Seller {
    type Id = SellerId;
    type Create = SellerCreate;
    type Update = SellerUpdate;
    type Action = SellerAction;
    type ActionResult = SellerActionResult;
    type Context = ();
    type Error = SellerError;

    const NAME: &'static str = "Seller";

    fn id(&self) -> SellerId {
        self.id
    }

    /// A new seller starts with an empty inventory keyed by its own id.
    fn from_create_params(id: SellerId, params: SellerCreate) -> Result<Self, SellerError> {
        require_text("name", &params.name).map_err(SellerError::Validation)?;
        Ok(Self {
            id,
            name: params.name,
            inventory: Inventory::new(id),
        })
    }

    fn on_update(&mut self, update: SellerUpdate, _ctx: &mut ()) -> Result<(), SellerError> {
        if let Some(name) = update.name {
            require_text("name", &name).map_err(SellerError::Validation)?;
            self.name = name;
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: SellerAction,
        _ctx: &mut (),
    ) -> Result<SellerActionResult, SellerError> {
        let inventory = &mut self.inventory;
        let result = match action {
            SellerAction::AddProduct(product) => {
                SellerActionResult::AddProduct(inventory.add_product(product)?)
            }
            SellerAction::RemoveProduct(id) => {
                SellerActionResult::RemoveProduct(inventory.remove_product(id)?)
            }
            SellerAction::UpdateStock { product_id, stock } => {
                SellerActionResult::UpdateStock(inventory.update_stock(product_id, stock)?)
            }
            SellerAction::ListInventory => SellerActionResult::ListInventory(inventory.list_names()),
        };
        Ok(result)
    }
}

impl Persisted for Seller {
    const COLLECTION: &'static str = "sellers";
    const ELEMENT: &'static str = "seller";
    type Record = SellerRecord;
    type XmlRecord = SellerXml;
    type Resolver = dyn ProductLookup;

    fn record_id(record: &SellerRecord) -> SellerId {
        record.seller_id
    }

    fn to_record(&self) -> SellerRecord {
        SellerRecord::from(self)
    }

    fn from_record(record: SellerRecord, products: &dyn ProductLookup) -> Self {
        let mut inventory = Inventory::new(record.seller_id);
        inventory.products = retain_known(record.inventory, products, |p| p.id)
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        Self {
            id: record.seller_id,
            name: record.name,
            inventory,
        }
    }
}
