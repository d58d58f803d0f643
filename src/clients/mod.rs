//! HTTP and Storefront client types.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async transport, one POST per call, no retries
//! - [`HttpResponse`]: a parsed response from the API
//! - [`HttpError`] / [`HttpResponseError`]: transport and status errors
//! - [`storefront::StorefrontClient`]: the GraphQL client for the Storefront API
//! - [`storefront::StorefrontError`]: errors from Storefront operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::{StorefrontClient, StorefrontConfig};
//!
//! let config = StorefrontConfig::new("token", "https://my-store.myshopify.com")?;
//! let client = StorefrontClient::new(&config)?;
//!
//! let data = client.send_query("{ shop { name } }").await?;
//! println!("{}", data["shop"]["name"]);
//! ```

mod errors;
mod http_client;
mod http_response;
pub mod storefront;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

pub use storefront::{GraphqlErrorMessage, StorefrontClient, StorefrontError};
