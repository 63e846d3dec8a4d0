//! # Catalog Wiring
//!
//! Builds the full set of managers over one storage backend and runs the workflows that
//! cross entity boundaries.
//!
//! ## Backends
//!
//! - [`InMemory`]: every manager over a `ResourceStore`; state dies with the process.
//! - [`Files<F>`]: every manager is a handler over `<data_dir>/<collection>.<ext>`, with
//!   `F` either [`Json`](store_framework::Json) or [`Xml`](store_framework::Xml).
//!
//! ## Dependency Wiring
//!
//! No manager owns another. [`Catalog`] lends them to each other per call:
//!
//! | Workflow                          | Dependency passed          |
//! |-----------------------------------|----------------------------|
//! | cart add / remove / clear / delete | `products` as stock ledger |
//! | order cancel                      | `products` as stock ledger |
//! | payment create / process          | `orders` as order lookup   |
//! | review add                        | `ratings` as rating ledger |
//!
//! Document backends additionally share one products handler as the lookup that rebuilds
//! product references when carts, categories, inventories and sellers are loaded.

mod backend;
mod catalog;
mod error;
mod tracing;

pub use backend::{Backend, Files, InMemory};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use self::tracing::setup_tracing;
