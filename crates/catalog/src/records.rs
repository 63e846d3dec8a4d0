//! Building blocks shared by the document records of entities that hold products.
//!
//! JSON keeps nested product lists as plain arrays. XML needs a container element, so the
//! XML mirrors wrap those lists in [`ProductList`], which reads and writes
//! `<products><product>...</product></products>`.

use crate::ledger::ProductLookup;
use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A product held by reference only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub product_id: ProductId,
}

/// Container for a nested list in an XML record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList<L> {
    #[serde(rename = "product", default = "Vec::new")]
    pub items: Vec<L>,
}

impl<L> Default for ProductList<L> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<L> From<Vec<L>> for ProductList<L> {
    fn from(items: Vec<L>) -> Self {
        Self { items }
    }
}

/// Looks every reference up, dropping the ones that no longer resolve.
pub(crate) fn resolve_refs(refs: Vec<ProductRef>, lookup: &dyn ProductLookup) -> Vec<Product> {
    refs.into_iter()
        .filter_map(|r| {
            let found = lookup.find_product(r.product_id);
            if found.is_none() {
                debug!(product_id = %r.product_id, "Dropping unknown product");
            }
            found
        })
        .collect()
}

/// Keeps the stored snapshots whose product still exists.
pub(crate) fn retain_known<L>(
    items: Vec<L>,
    lookup: &dyn ProductLookup,
    id_of: impl Fn(&L) -> ProductId,
) -> Vec<L> {
    items
        .into_iter()
        .filter(|item| {
            let id = id_of(item);
            let known = lookup.find_product(id).is_some();
            if !known {
                debug!(product_id = %id, "Dropping unknown product");
            }
            known
        })
        .collect()
}
