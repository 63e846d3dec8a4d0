//! # Catalog Demo
//!
//! Runs one shopping session end to end, first in memory and then against the document
//! backend chosen by [`CatalogConfig::from_env`]:
//!
//! 1. Register a user (or reuse them when the documents already know the email).
//! 2. Create a product and reserve some of it in the user's cart.
//! 3. Check out, place the order and pay for it.
//! 4. Cancel a second order and watch the stock come back.
//!
//! ```bash
//! RUST_LOG=info CATALOG_DATA_DIR=/tmp/catalog CATALOG_FORMAT=xml cargo run -p catalog
//! ```

use catalog::config::{CatalogConfig, DocumentKind};
use catalog::lifecycle::{setup_tracing, Backend, Catalog, CatalogError, Files};
use catalog::model::{Address, AddressId, Cart, ProductCreate, User, UserCreate};
use store_framework::{Json, Xml};
use tracing::{error, info};

const EMAIL: &str = "alice@example.com";

fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting catalog demo");

    let span = tracing::info_span!("in_memory");
    span.in_scope(|| shop(&mut Catalog::in_memory()))
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("documents", format = %config.format);
    let result = span.in_scope(|| match config.format {
        DocumentKind::Json => shop(&mut Catalog::<Files<Json>>::open(&config.data_dir)),
        DocumentKind::Xml => shop(&mut Catalog::<Files<Xml>>::open(&config.data_dir)),
    });
    match result {
        Ok(()) => info!(
            products = %config.document_path("products").display(),
            "Documents written"
        ),
        Err(e) => {
            error!(error = %e, "Document session failed");
            return Err(e.to_string());
        }
    }

    info!("Demo completed successfully");
    Ok(())
}

fn customer<B: Backend>(catalog: &mut Catalog<B>) -> Result<(User, Cart), CatalogError> {
    if let Some(user) = catalog.users.find_by_email(EMAIL)? {
        let cart = match catalog.carts.get_cart_by_user(user.id) {
            Ok(cart) => cart,
            Err(_) => catalog.carts.create_cart(user.id)?,
        };
        info!(user_id = %user.id, "Returning customer");
        return Ok((user, cart));
    }
    catalog.register_user(UserCreate::new(EMAIL, "Alice").with_phone("555-0100"))
}

fn shop<B: Backend>(catalog: &mut Catalog<B>) -> Result<(), CatalogError> {
    let (user, cart) = customer(catalog)?;
    let address = Address {
        id: AddressId(1),
        user_id: user.id,
        city: "Springfield".to_string(),
        street: "Evergreen Terrace".to_string(),
        house: "742".to_string(),
        apartment: String::new(),
    };
    let widget = catalog
        .products
        .create_product(ProductCreate::new("Widget", "Tools", 10.0, 5))?;
    info!(product_id = %widget.id, stock = widget.stock, "Product created");

    catalog.add_to_cart(cart.id, widget.id, 3)?;
    let order = catalog.checkout(cart.id, address.clone(), "card")?;
    catalog.place_order(order.id)?;
    let payment = catalog.pay(order.id, "card")?;
    let status = catalog.process_payment(payment.id)?;
    info!(order_id = %order.id, total = order.total_amount, ?status, "Order paid");

    catalog.add_to_cart(cart.id, widget.id, 2)?;
    let second = catalog.checkout(cart.id, address, "card")?;
    catalog.place_order(second.id)?;
    catalog.cancel_order(second.id)?;
    let stock = catalog.products.check_stock(widget.id)?;
    info!(order_id = %second.id, stock, "Order cancelled");

    catalog.review(user.id, widget.id, 5, "Does what it says")?;
    Ok(())
}
