//! # Shopify Storefront Client
//!
//! A small async client for the Shopify Storefront GraphQL API, with a
//! reusable fragment library and normalization of product and collection
//! responses.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - Validated newtypes for the access token and store URL
//! - [`StorefrontClient`] for raw queries and canned product/collection lookups
//! - GraphQL fragments composed once per process ([`graphql::fragments`])
//! - Normalized records that flatten `edges { node }` connections ([`types`])
//! - An explicit error type for GraphQL `errors` and non-2xx responses
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_storefront::{ApiVersion, StoreUrl, StorefrontAccessToken, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .access_token(StorefrontAccessToken::new("public-access-token").unwrap())
//!     .store_url(StoreUrl::new("https://my-store.myshopify.com").unwrap())
//!     .api_version(ApiVersion::V2021_04)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.graphql_endpoint(),
//!     "https://my-store.myshopify.com/api/2021-04/graphql.json"
//! );
//! ```
//!
//! ## Fetching Products
//!
//! ```rust,ignore
//! use shopify_storefront::{StorefrontClient, StorefrontConfig};
//!
//! let config = StorefrontConfig::new("public-access-token", "https://my-store.myshopify.com")?;
//! let client = StorefrontClient::new(&config)?;
//!
//! for product in client.get_products(Some(10)).await? {
//!     println!("{} ({} variants)", product.title, product.variants.len());
//! }
//!
//! let tee = client.get_product_by_slug("classic-tee").await?;
//! let shirts = client.get_collection_with_products("shirts").await?;
//! ```
//!
//! ## Raw Queries
//!
//! ```rust,ignore
//! use shopify_storefront::graphql::fragments::PRODUCT;
//! use shopify_storefront::graphql::QueryBuilder;
//!
//! let query = QueryBuilder::new(&PRODUCT)
//!     .root("productByHandle")
//!     .string_arg("handle", "classic-tee")
//!     .build();
//!
//! let data = client.send_query(&query).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Escaped arguments**: Handles and IDs are rendered as quoted GraphQL strings

pub mod clients;
pub mod config;
pub mod error;
pub mod graphql;
pub mod types;

// Re-export public types at crate root for convenience
pub use config::{
    ApiVersion, StoreUrl, StorefrontAccessToken, StorefrontConfig, StorefrontConfigBuilder,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    GraphqlErrorMessage, HttpClient, HttpError, HttpResponse, HttpResponseError,
    StorefrontClient, StorefrontError,
};

// Re-export normalized records
pub use types::{Collection, CollectionWithProducts, Image, Money, Product, Variant};
