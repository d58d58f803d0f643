//! Configuration error types for the Storefront client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials or store URLs are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use shopify_storefront::{ConfigError, StorefrontAccessToken};
//!
//! let result = StorefrontAccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the Storefront client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Storefront access token cannot be empty.
    #[error("Storefront access token cannot be empty. Please provide a valid Storefront API access token.")]
    EmptyAccessToken,

    /// Store URL is invalid.
    #[error("Invalid store URL '{url}'. Please provide a URL with scheme (e.g., 'https://my-store.myshopify.com').")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2021-04') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
