//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// HTTP header carrying the Storefront access token.
pub const ACCESS_TOKEN_HEADER_NAME: &str = "X-Shopify-Storefront-Access-Token";

/// A validated Storefront API access token.
///
/// The token is sent with every request in the
/// `X-Shopify-Storefront-Access-Token` header.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `StorefrontAccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::StorefrontAccessToken;
///
/// let token = StorefrontAccessToken::new("my-token").unwrap();
/// assert_eq!(token.header_name(), "X-Shopify-Storefront-Access-Token");
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "StorefrontAccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StorefrontAccessToken(String);

impl StorefrontAccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or
    /// only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Returns the HTTP header name used to send this token.
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        ACCESS_TOKEN_HEADER_NAME
    }
}

impl AsRef<str> for StorefrontAccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StorefrontAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StorefrontAccessToken(*****)")
    }
}

/// A validated store URL.
///
/// Any URL pointing at the store is accepted (a product page works as well
/// as the bare domain); only its origin (`scheme://host[:port]`) is used to
/// build the API endpoint.
///
/// # Serialization
///
/// `StoreUrl` serializes to and deserializes from the URL string as given:
///
/// ```rust
/// use shopify_storefront::StoreUrl;
///
/// let url = StoreUrl::new("https://my-store.myshopify.com").unwrap();
/// let json = serde_json::to_string(&url).unwrap();
/// assert_eq!(json, r#""https://my-store.myshopify.com""#);
/// ```
///
/// # Example
///
/// ```rust
/// use shopify_storefront::StoreUrl;
///
/// let url = StoreUrl::new("https://my-store.myshopify.com/products/tee?v=1").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "my-store.myshopify.com");
/// assert_eq!(url.origin(), "https://my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUrl {
    url: String,
    scheme_end: usize,
    authority_start: usize,
    authority_end: usize,
}

impl StoreUrl {
    /// Creates a new validated store URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreUrl`] if the URL has no `http` or
    /// `https` scheme, or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidStoreUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let authority_start = scheme_end + 3;
        let remainder = &url[authority_start..];
        let authority_end = remainder
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| authority_start + i);

        let authority = &url[authority_start..authority_end];
        let host = authority.split(':').next().unwrap_or_default();
        if host.is_empty() || authority.contains('@') || authority.contains(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            authority_start,
            authority_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name, without any port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        let authority = &self.url[self.authority_start..self.authority_end];
        authority.split(':').next().unwrap_or(authority)
    }

    /// Returns the origin: scheme, host and port with no path or trailing slash.
    ///
    /// Scheme and host are lower-cased and a port matching the scheme's
    /// default (`:443` for https, `:80` for http) is dropped.
    #[must_use]
    pub fn origin(&self) -> String {
        let scheme = self.scheme().to_ascii_lowercase();
        let authority = self.url[self.authority_start..self.authority_end].to_ascii_lowercase();
        let default_port = if scheme == "https" { ":443" } else { ":80" };
        let authority = authority.strip_suffix(default_port).unwrap_or(&authority);
        format!("{scheme}://{authority}")
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Serialize for StoreUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for StoreUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
