//! GraphQL documents: the fragment library and query construction.
//!
//! - [`fragments`]: `FragmentImage`, `FragmentCollection`, `FragmentOption`,
//!   `FragmentVariant`, `FragmentProduct` and `FragmentCollectionWithProducts`
//! - [`QueryBuilder`] and the canned query functions used by
//!   [`StorefrontClient`](crate::StorefrontClient)

pub mod fragments;
mod query;

pub use fragments::Fragment;
pub use query::{
    collection_by_handle_query, product_by_handle_query, product_query, products_query,
    quote_string, QueryBuilder, DEFAULT_PRODUCTS_FIRST,
};
