//! HTTP client for Storefront API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the connection
//! pool and default headers and POSTs JSON bodies to the store's
//! `graphql.json` endpoint. It makes exactly one attempt per call.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::{StorefrontConfig, ACCESS_TOKEN_HEADER_NAME};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Storefront API.
///
/// The client handles:
/// - Endpoint construction from the store origin and API version
/// - Default headers including User-Agent and the storefront access token
/// - JSON decoding of the response body
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URL (e.g., `https://my-store.myshopify.com/api/2021-04/graphql.json`).
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

// Manual Debug so the access token in the default headers is never printed
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .default_headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(ACCESS_TOKEN_HEADER_NAME) {
                    (name.as_str(), "*****")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("endpoint", &self.endpoint)
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client for the configured store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(config: &StorefrontConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Storefront Client v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let token = config.access_token();
        default_headers.insert(token.header_name().to_string(), token.as_ref().to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            endpoint: config.graphql_endpoint(),
            default_headers,
        })
    }

    /// Returns the endpoint every request is sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POSTs `body` as JSON to the endpoint and parses the JSON response.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Network`] if the request could not be sent or read
    /// - [`HttpError::Response`] if the status is not 2xx
    /// - [`HttpError::InvalidJson`] if a 2xx body is not JSON
    pub async fn post_json(&self, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body.to_string()).send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let parsed = if body_text.trim().is_empty() {
            Ok(serde_json::json!({}))
        } else {
            serde_json::from_str::<serde_json::Value>(&body_text)
        };

        let body = match parsed {
            Ok(body) => body,
            Err(source) if (200..=299).contains(&code) => {
                return Err(HttpError::InvalidJson { code, source });
            }
            // Error pages are often HTML; keep the raw text for the error message
            Err(_) => serde_json::json!({ "errors": body_text }),
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Storefront API at {}, received reason: {}",
                self.endpoint,
                reason
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response to a JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "error_description"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
impl HttpClient {
    fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}
