//! Configuration types for the Storefront client.
//!
//! # Overview
//!
//! - [`StorefrontConfig`]: credentials, store URL and API version for a client
//! - [`StorefrontConfigBuilder`]: a builder for constructing [`StorefrontConfig`]
//! - [`StorefrontAccessToken`]: a validated access token with masked debug output
//! - [`StoreUrl`]: a validated store URL
//! - [`ApiVersion`]: the Storefront API version to use
//!
//! # Example
//!
//! ```rust
//! use shopify_storefront::{ApiVersion, StoreUrl, StorefrontAccessToken, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .access_token(StorefrontAccessToken::new("my-token").unwrap())
//!     .store_url(StoreUrl::new("https://my-store.myshopify.com").unwrap())
//!     .api_version(ApiVersion::V2021_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.graphql_endpoint(),
//!     "https://my-store.myshopify.com/api/2021-07/graphql.json"
//! );
//! ```

mod newtypes;
mod version;

pub use newtypes::{StoreUrl, StorefrontAccessToken, ACCESS_TOKEN_HEADER_NAME};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for a [`StorefrontClient`](crate::StorefrontClient).
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    access_token: StorefrontAccessToken,
    store_url: StoreUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Shorthand for a configuration from raw strings with the default API version.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the token is empty or the URL is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_storefront::{ApiVersion, StorefrontConfig};
    ///
    /// let config = StorefrontConfig::new("token", "https://my-store.myshopify.com").unwrap();
    /// assert_eq!(config.api_version(), &ApiVersion::V2021_04);
    /// ```
    pub fn new(access_token: &str, store_url: &str) -> Result<Self, ConfigError> {
        Self::builder()
            .access_token(StorefrontAccessToken::new(access_token)?)
            .store_url(StoreUrl::new(store_url)?)
            .build()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &StorefrontAccessToken {
        &self.access_token
    }

    /// Returns the store URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a copy of this configuration targeting another API version.
    #[must_use]
    pub fn with_api_version(&self, version: ApiVersion) -> Self {
        Self {
            api_version: version,
            ..self.clone()
        }
    }

    /// Returns the full GraphQL endpoint: `{origin}/api/{version}/graphql.json`.
    #[must_use]
    pub fn graphql_endpoint(&self) -> String {
        format!(
            "{}/api/{}/graphql.json",
            self.store_url.origin(),
            self.api_version
        )
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// Required fields are `access_token` and `store_url`.
///
/// # Defaults
///
/// - `api_version`: `2021-04`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    access_token: Option<StorefrontAccessToken>,
    store_url: Option<StoreUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: StorefrontAccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the store URL (required).
    #[must_use]
    pub fn store_url(mut self, url: StoreUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorefrontConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` or
    /// `store_url` are not set.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;

        Ok(StorefrontConfig {
            access_token,
            store_url,
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> StorefrontAccessToken {
        StorefrontAccessToken::new("token").unwrap()
    }

    fn store() -> StoreUrl {
        StoreUrl::new("https://my-store.myshopify.com").unwrap()
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = StorefrontConfigBuilder::new().store_url(store()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_requires_store_url() {
        let result = StorefrontConfigBuilder::new().access_token(token()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "store_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StorefrontConfig::builder()
            .access_token(token())
            .store_url(store())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2021_04);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_graphql_endpoint_uses_origin_and_version() {
        let config = StorefrontConfig::builder()
            .access_token(token())
            .store_url(StoreUrl::new("https://my-store.myshopify.com/products/tee").unwrap())
            .build()
            .unwrap();

        assert_eq!(
            config.graphql_endpoint(),
            "https://my-store.myshopify.com/api/2021-04/graphql.json"
        );
    }

    #[test]
    fn test_new_validates_inputs() {
        assert!(matches!(
            StorefrontConfig::new("", "https://my-store.myshopify.com"),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            StorefrontConfig::new("token", "my-store"),
            Err(ConfigError::InvalidStoreUrl { .. })
        ));
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = StorefrontConfig::new("secret-token", "https://my-store.myshopify.com")
            .unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("StorefrontConfig"));
        assert!(!debug_str.contains("secret-token"));
    }
}
