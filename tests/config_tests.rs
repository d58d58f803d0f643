//! Integration tests for Storefront client configuration.
//!
//! These tests verify validation of the access token and store URL, API
//! version parsing, and endpoint construction through the public API.

use shopify_storefront::{
    ApiVersion, ConfigError, StoreUrl, StorefrontAccessToken, StorefrontClient, StorefrontConfig,
};

// === Access Token ===

#[test]
fn test_access_token_rejects_blank_values() {
    assert!(matches!(
        StorefrontAccessToken::new(""),
        Err(ConfigError::EmptyAccessToken)
    ));
    assert!(matches!(
        StorefrontAccessToken::new("   "),
        Err(ConfigError::EmptyAccessToken)
    ));
}

#[test]
fn test_access_token_uses_storefront_header() {
    let token = StorefrontAccessToken::new("abc").unwrap();
    assert_eq!(token.header_name(), "X-Shopify-Storefront-Access-Token");
    assert_eq!(token.as_ref(), "abc");
}

#[test]
fn test_access_token_debug_is_masked() {
    let token = StorefrontAccessToken::new("super-secret").unwrap();
    let debug = format!("{token:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("*****"));
}

// === Store URL ===

#[test]
fn test_store_url_accepts_http_and_https() {
    assert!(StoreUrl::new("https://my-store.myshopify.com").is_ok());
    assert!(StoreUrl::new("http://127.0.0.1:8080").is_ok());
    assert!(StoreUrl::new("https://shop.example.com/").is_ok());
}

#[test]
fn test_store_url_rejects_invalid_values() {
    for url in [
        "",
        "my-store.myshopify.com",
        "ftp://my-store.myshopify.com",
        "https://",
        "https://user@my-store.myshopify.com",
    ] {
        assert!(
            matches!(StoreUrl::new(url), Err(ConfigError::InvalidStoreUrl { .. })),
            "expected {url:?} to be rejected"
        );
    }
}

#[test]
fn test_store_url_origin_drops_path_and_keeps_port() {
    let url = StoreUrl::new("HTTP://localhost:3000/collections/all?page=2").unwrap();
    assert_eq!(url.origin(), "http://localhost:3000");
    assert_eq!(url.host_name(), "localhost");
}

// === API Version ===

#[test]
fn test_api_version_parsing() {
    assert_eq!("2021-04".parse::<ApiVersion>().unwrap(), ApiVersion::V2021_04);
    assert_eq!("unstable".parse::<ApiVersion>().unwrap(), ApiVersion::Unstable);
    assert_eq!(
        "2023-07".parse::<ApiVersion>().unwrap(),
        ApiVersion::Custom("2023-07".to_string())
    );
    assert!(matches!(
        "2021-05".parse::<ApiVersion>(),
        Err(ConfigError::InvalidApiVersion { .. })
    ));
}

#[test]
fn test_api_versions_are_ordered() {
    assert!(ApiVersion::V2021_01 < ApiVersion::V2021_04);
    assert!(ApiVersion::V2022_04 < ApiVersion::Unstable);
    assert!("2019-10".parse::<ApiVersion>().unwrap() < ApiVersion::V2021_04);
    assert!(!ApiVersion::Unstable.is_stable());
}

// === Config and Client ===

#[test]
fn test_endpoint_for_each_version() {
    let config = StorefrontConfig::new("token", "https://my-store.myshopify.com").unwrap();

    for (version, expected) in [
        (ApiVersion::V2021_04, "https://my-store.myshopify.com/api/2021-04/graphql.json"),
        (ApiVersion::V2022_04, "https://my-store.myshopify.com/api/2022-04/graphql.json"),
        (ApiVersion::Unstable, "https://my-store.myshopify.com/api/unstable/graphql.json"),
    ] {
        let client = StorefrontClient::with_version(&config, version).unwrap();
        assert_eq!(client.endpoint(), expected);
    }
}

#[test]
fn test_builder_user_agent_prefix() {
    let config = StorefrontConfig::builder()
        .access_token(StorefrontAccessToken::new("token").unwrap())
        .store_url(StoreUrl::new("https://my-store.myshopify.com").unwrap())
        .user_agent_prefix("MyStorefront/1.0")
        .build()
        .unwrap();

    assert_eq!(config.user_agent_prefix(), Some("MyStorefront/1.0"));
}

#[test]
fn test_config_error_messages_name_the_problem() {
    let error = StorefrontConfig::new("token", "not a url").unwrap_err();
    assert!(error.to_string().contains("not a url"));
}
