//! Storefront API client for Shopify.
//!
//! # Overview
//!
//! - [`StorefrontClient`]: sends queries and runs the canned product and
//!   collection operations
//! - [`StorefrontError`]: failures, including GraphQL-level `errors`
//! - [`GraphqlErrorMessage`]: one entry of a response's `errors` array
//!
//! Requests go to `{origin}/api/{version}/graphql.json` and authenticate with
//! the `X-Shopify-Storefront-Access-Token` header.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::{StorefrontClient, StorefrontConfig};
//!
//! let config = StorefrontConfig::new("public-access-token", "https://my-store.myshopify.com")?;
//! let client = StorefrontClient::new(&config)?;
//!
//! let data = client.send_query("{ shop { name } }").await?;
//! println!("{}", data["shop"]["name"]);
//!
//! // Raw data for a collection page
//! let raw = client.get_products_by_category("shirts").await?;
//! println!("{}", raw["collectionByHandle"]["title"]);
//! ```

mod client;
mod errors;

pub use client::StorefrontClient;
pub use errors::{GraphqlErrorMessage, StorefrontError};
