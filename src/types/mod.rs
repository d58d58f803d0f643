//! Storefront records and response normalization.
//!
//! The API answers with nested connections (`{ edges: [{ node }] }`) and a
//! few awkward field names. This module deserializes those shapes into
//! `Raw*` records and normalizes them into flatter ones:
//!
//! - [`to_sequence`] / [`Connection::into_nodes`]: connection to ordered nodes
//! - [`normalize_product`]: `priceRange.maxVariantPrice` becomes `price`
//! - [`normalize_variant`]: `priceV2` becomes `price`
//! - [`normalize_collection`]: nested products normalized

mod collection;
mod common;
mod connection;
mod product;

pub use collection::{
    normalize_collection, Collection, CollectionWithProducts, RawCollectionWithProducts,
};
pub use common::{Image, Money, SelectedOption};
pub use connection::{to_sequence, Connection, Edge};
pub use product::{
    normalize_product, normalize_variant, PriceRange, Product, RawProduct, RawVariant, Variant,
};
