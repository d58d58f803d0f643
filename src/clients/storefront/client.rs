//! Storefront GraphQL client.
//!
//! This module provides the [`StorefrontClient`] type for sending queries to
//! a store's Storefront API and for the canned product and collection
//! lookups built on the fragment library.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::{StorefrontClient, StorefrontConfig};
//!
//! let config = StorefrontConfig::new("public-access-token", "https://my-store.myshopify.com")?;
//! let client = StorefrontClient::new(&config)?;
//!
//! // First 50 products, normalized
//! let products = client.get_products(None).await?;
//!
//! // A single product by handle
//! if let Some(product) = client.get_product_by_slug("classic-tee").await? {
//!     println!("{} costs {} {}", product.title, product.price.amount, product.price.currency_code);
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::clients::storefront::errors::{GraphqlErrorMessage, StorefrontError};
use crate::clients::HttpClient;
use crate::config::{ApiVersion, StorefrontConfig};
use crate::graphql::{
    collection_by_handle_query, product_by_handle_query, product_query, products_query,
    DEFAULT_PRODUCTS_FIRST,
};
use crate::types::{
    normalize_collection, normalize_product, CollectionWithProducts, Connection, Product,
    RawCollectionWithProducts, RawProduct,
};

/// GraphQL client for the Shopify Storefront API.
///
/// Every operation makes exactly one POST to
/// `{origin}/api/{version}/graphql.json` with the
/// `X-Shopify-Storefront-Access-Token` header. Nothing is retried, cached or
/// timed out by the client; wrap calls in `tokio::time::timeout` if you need a
/// bound on latency.
///
/// # Thread Safety
///
/// `StorefrontClient` is `Send + Sync` and holds no mutable state, so one
/// client can serve many concurrent requests.
#[derive(Debug)]
pub struct StorefrontClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

#[derive(Deserialize)]
struct ProductsData {
    #[serde(default)]
    products: Option<Connection<RawProduct>>,
}

#[derive(Deserialize)]
struct NodeData {
    #[serde(default)]
    node: Option<RawProduct>,
}

#[derive(Deserialize)]
struct ProductByHandleData {
    #[serde(default, rename = "productByHandle")]
    product: Option<RawProduct>,
}

#[derive(Deserialize)]
struct CollectionByHandleData {
    #[serde(default, rename = "collectionByHandle")]
    collection: Option<RawCollectionWithProducts>,
}

impl StorefrontClient {
    /// Creates a new client for the configured store and API version.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_storefront::{ApiVersion, StorefrontClient, StorefrontConfig};
    ///
    /// let config = StorefrontConfig::new("token", "https://my-store.myshopify.com").unwrap();
    /// let client = StorefrontClient::new(&config).unwrap();
    ///
    /// assert_eq!(client.api_version(), &ApiVersion::V2021_04);
    /// assert_eq!(client.endpoint(), "https://my-store.myshopify.com/api/2021-04/graphql.json");
    /// ```
    pub fn new(config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self {
            http_client,
            api_version: config.api_version().clone(),
        })
    }

    /// Creates a new client that overrides the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the HTTP client cannot be built.
    pub fn with_version(
        config: &StorefrontConfig,
        version: ApiVersion,
    ) -> Result<Self, StorefrontError> {
        if &version == config.api_version() {
            tracing::debug!(
                "Storefront client has a redundant API version override to the default {}",
                version
            );
        } else {
            tracing::debug!(
                "Storefront client overriding default API version {} with {}",
                config.api_version(),
                version
            );
        }

        Self::new(&config.with_api_version(version))
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Sends a raw GraphQL query and returns the response's `data` object.
    ///
    /// The request body is exactly `{"query": <query>}`.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Http`] for network errors, non-2xx responses and
    ///   non-JSON bodies
    /// - [`StorefrontError::Graphql`] if the response carries `errors`
    /// - [`StorefrontError::MissingData`] if `data` is absent or `null`
    pub async fn send_query(&self, query: &str) -> Result<Value, StorefrontError> {
        self.execute(query, serde_json::json!({ "query": query }))
            .await
    }

    /// Sends a GraphQL query with variables and returns the `data` object.
    ///
    /// # Errors
    ///
    /// Same as [`send_query`](Self::send_query).
    pub async fn send_query_with_variables(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<Value, StorefrontError> {
        self.execute(
            query,
            serde_json::json!({ "query": query, "variables": variables }),
        )
        .await
    }

    /// Fetches the first `first` products (default 50), normalized.
    ///
    /// Returns an empty list when the response has no `products` field.
    ///
    /// # Errors
    ///
    /// Same as [`send_query`](Self::send_query), plus
    /// [`StorefrontError::Decode`] if a product doesn't match `FragmentProduct`.
    pub async fn get_products(&self, first: Option<u32>) -> Result<Vec<Product>, StorefrontError> {
        let query = products_query(first.unwrap_or(DEFAULT_PRODUCTS_FIRST));
        let data: ProductsData = serde_json::from_value(self.send_query(&query).await?)?;

        Ok(data
            .products
            .map(Connection::into_nodes_or_empty)
            .unwrap_or_default()
            .into_iter()
            .map(normalize_product)
            .collect())
    }

    /// Fetches a single product by global ID, normalized.
    ///
    /// Returns `None` when no node has that ID.
    ///
    /// # Errors
    ///
    /// Same as [`get_products`](Self::get_products).
    pub async fn get_product(&self, id: &str) -> Result<Option<Product>, StorefrontError> {
        let data: NodeData = serde_json::from_value(self.send_query(&product_query(id)).await?)?;
        Ok(data.node.map(normalize_product))
    }

    /// Fetches a single product by handle (URL slug), normalized.
    ///
    /// Returns `None` when no product has that handle.
    ///
    /// # Errors
    ///
    /// Same as [`get_products`](Self::get_products).
    pub async fn get_product_by_slug(
        &self,
        handle: &str,
    ) -> Result<Option<Product>, StorefrontError> {
        let query = product_by_handle_query(handle);
        let data: ProductByHandleData = serde_json::from_value(self.send_query(&query).await?)?;
        Ok(data.product.map(normalize_product))
    }

    /// Fetches a collection and its first 10 products by handle, as raw `data`.
    ///
    /// The result is the unmodified `data` object, i.e.
    /// `{"collectionByHandle": {...}}` with connections left nested. Use
    /// [`get_collection_with_products`](Self::get_collection_with_products)
    /// for the normalized form.
    ///
    /// # Errors
    ///
    /// Same as [`send_query`](Self::send_query).
    pub async fn get_products_by_category(&self, handle: &str) -> Result<Value, StorefrontError> {
        self.send_query(&collection_by_handle_query(handle)).await
    }

    /// Fetches a collection and its first 10 products by handle, normalized.
    ///
    /// Returns `None` when no collection has that handle.
    ///
    /// # Errors
    ///
    /// Same as [`get_products`](Self::get_products).
    pub async fn get_collection_with_products(
        &self,
        handle: &str,
    ) -> Result<Option<CollectionWithProducts>, StorefrontError> {
        let data: CollectionByHandleData =
            serde_json::from_value(self.get_products_by_category(handle).await?)?;
        Ok(data.collection.map(normalize_collection))
    }

    async fn execute(&self, query: &str, body: Value) -> Result<Value, StorefrontError> {
        tracing::debug!(
            endpoint = self.endpoint(),
            query_len = query.len(),
            "Sending Storefront query"
        );

        let response = self.http_client.post_json(&body).await?;
        extract_data(response.body)
    }
}

/// Pulls `data` out of a GraphQL response body, failing on reported errors.
fn extract_data(mut body: Value) -> Result<Value, StorefrontError> {
    if let Some(errors) = body.get("errors").filter(|errors| has_errors(errors)) {
        let errors = parse_errors(errors);
        tracing::warn!(
            count = errors.len(),
            "Storefront API returned GraphQL errors: {}",
            errors
                .first()
                .map_or("", |error| error.message.as_str())
        );
        return Err(StorefrontError::Graphql { errors });
    }

    match body.as_object_mut().and_then(|object| object.remove("data")) {
        None | Some(Value::Null) => Err(StorefrontError::MissingData),
        Some(data) => Ok(data),
    }
}

fn has_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => false,
        Value::Array(entries) => !entries.is_empty(),
        _ => true,
    }
}

fn parse_errors(errors: &Value) -> Vec<GraphqlErrorMessage> {
    if let Ok(parsed) = serde_json::from_value::<Vec<GraphqlErrorMessage>>(errors.clone()) {
        return parsed;
    }

    let message = errors
        .as_str()
        .map_or_else(|| errors.to_string(), String::from);
    vec![GraphqlErrorMessage {
        message,
        path: None,
        extensions: None,
    }]
}
