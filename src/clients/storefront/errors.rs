//! Error types for Storefront operations.
//!
//! Unlike a bare HTTP client, Storefront operations look inside the response:
//! a `200 OK` whose body carries a GraphQL `errors` array becomes
//! [`StorefrontError::Graphql`], and a body without `data` becomes
//! [`StorefrontError::MissingData`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::StorefrontError;
//!
//! match client.get_product_by_slug("tee").await {
//!     Ok(Some(product)) => println!("{}", product.title),
//!     Ok(None) => println!("no such product"),
//!     Err(StorefrontError::Graphql { errors }) => {
//!         for error in errors {
//!             println!("GraphQL error: {}", error.message);
//!         }
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;

/// One entry of a GraphQL response's `errors` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorMessage {
    /// Human-readable description.
    pub message: String,
    /// Path to the response field that failed, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    /// Server-specific details such as an error `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

/// Error type for Storefront operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// An HTTP-level error occurred (network, non-2xx status, non-JSON body).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The API answered with GraphQL errors.
    #[error("GraphQL request returned errors: {}", join_messages(.errors))]
    Graphql {
        /// The reported errors, in response order.
        errors: Vec<GraphqlErrorMessage>,
    },

    /// The response had neither errors nor a `data` object.
    #[error("GraphQL response did not contain data")]
    MissingData,

    /// `data` did not have the shape the operation expected.
    #[error("Failed to decode GraphQL data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn join_messages(errors: &[GraphqlErrorMessage]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
