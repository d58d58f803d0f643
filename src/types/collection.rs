//! Collection records, raw and normalized.

use serde::{Deserialize, Serialize};

use super::connection::{nodes_of, Connection};
use super::product::{normalize_product, Product, RawProduct};

/// A collection as selected by `FragmentCollection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub handle: String,
    #[serde(default)]
    pub description: String,
    pub title: String,
}

/// A collection as returned by `FragmentCollectionWithProducts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCollectionWithProducts {
    #[serde(flatten)]
    pub collection: Collection,
    #[serde(default)]
    pub products: Option<Connection<RawProduct>>,
}

/// A normalized collection with its first page of products.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionWithProducts {
    #[serde(flatten)]
    pub collection: Collection,
    pub products: Vec<Product>,
}

/// Normalizes a collection, normalizing each nested product.
#[must_use]
pub fn normalize_collection(raw: RawCollectionWithProducts) -> CollectionWithProducts {
    CollectionWithProducts {
        collection: raw.collection,
        products: nodes_of(raw.products)
            .into_iter()
            .map(normalize_product)
            .collect(),
    }
}

impl From<RawCollectionWithProducts> for CollectionWithProducts {
    fn from(raw: RawCollectionWithProducts) -> Self {
        normalize_collection(raw)
    }
}
