//! Document records for categories. Products are stored by id and re-resolved on load.

use crate::model::{Category, CategoryId};
use crate::records::{ProductList, ProductRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub products: Vec<ProductRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryXml {
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub products: ProductList<ProductRef>,
}

impl From<&Category> for CategoryRecord {
    fn from(category: &Category) -> Self {
        Self {
            category_id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            products: category
                .products
                .iter()
                .map(|p| ProductRef { product_id: p.id })
                .collect(),
        }
    }
}

impl From<CategoryRecord> for CategoryXml {
    fn from(r: CategoryRecord) -> Self {
        Self {
            category_id: r.category_id,
            name: r.name,
            description: r.description,
            products: r.products.into(),
        }
    }
}

impl From<CategoryXml> for CategoryRecord {
    fn from(x: CategoryXml) -> Self {
        Self {
            category_id: x.category_id,
            name: x.name,
            description: x.description,
            products: x.products.items,
        }
    }
}
