//! Product and variant records, raw and normalized.
//!
//! The `Raw*` types mirror what `FragmentProduct` / `FragmentVariant` select.
//! [`normalize_product`] and [`normalize_variant`] turn them into the flatter
//! [`Product`] and [`Variant`] records, where `price` is the one canonical
//! name for money on both.

use serde::{Deserialize, Serialize};

use super::collection::Collection;
use super::common::{Image, Money, SelectedOption};
use super::connection::{nodes_of, Connection};

/// A product variant as returned by `FragmentVariant`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariant {
    pub price_v2: Money,
    #[serde(default)]
    pub available_for_sale: Option<bool>,
    #[serde(default)]
    pub quantity_available: Option<i64>,
    #[serde(default)]
    pub requires_shipping: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

/// A normalized product variant.
///
/// Every field of [`RawVariant`] is carried over unchanged, except that
/// `priceV2` is exposed as `price`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_for_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_available: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_options: Vec<SelectedOption>,
}

/// `priceRange` of a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub max_variant_price: Money,
}

/// A product as returned by `FragmentProduct`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: String,
    pub handle: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price_range: PriceRange,
    #[serde(default)]
    pub variants: Option<Connection<RawVariant>>,
    #[serde(default)]
    pub images: Option<Connection<Image>>,
    #[serde(default)]
    pub collections: Option<Connection<Collection>>,
}

/// A normalized product.
///
/// `price` is the product's maximum variant price. Variants, images and
/// parent collections are plain ordered lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Global ID (`gid://shopify/Product/...`).
    pub id: String,
    /// URL slug.
    pub handle: String,
    pub tags: Vec<String>,
    pub title: String,
    pub description: String,
    pub price: Money,
    pub variants: Vec<Variant>,
    pub images: Vec<Image>,
    /// Collections the product belongs to (first 8).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,
}

/// Normalizes a variant: `price` takes the value of `priceV2`, everything
/// else is copied as-is.
#[must_use]
pub fn normalize_variant(raw: RawVariant) -> Variant {
    Variant {
        price: raw.price_v2,
        available_for_sale: raw.available_for_sale,
        quantity_available: raw.quantity_available,
        requires_shipping: raw.requires_shipping,
        title: raw.title,
        selected_options: raw.selected_options,
    }
}

/// Normalizes a product.
///
/// Connections with no `edges` become empty lists.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::types::{normalize_product, RawProduct};
///
/// let raw: RawProduct = serde_json::from_value(serde_json::json!({
///     "id": "gid://1",
///     "handle": "tee",
///     "title": "Tee",
///     "priceRange": { "maxVariantPrice": { "amount": "10.00", "currencyCode": "USD" } },
///     "images": {}
/// }))
/// .unwrap();
///
/// let product = normalize_product(raw);
/// assert_eq!(product.price.amount, "10.00");
/// assert!(product.images.is_empty());
/// ```
#[must_use]
pub fn normalize_product(raw: RawProduct) -> Product {
    Product {
        id: raw.id,
        handle: raw.handle,
        tags: raw.tags,
        title: raw.title,
        description: raw.description,
        price: raw.price_range.max_variant_price,
        variants: nodes_of(raw.variants)
            .into_iter()
            .map(normalize_variant)
            .collect(),
        images: nodes_of(raw.images),
        collections: nodes_of(raw.collections),
    }
}

impl From<RawVariant> for Variant {
    fn from(raw: RawVariant) -> Self {
        normalize_variant(raw)
    }
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        normalize_product(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn usd(amount: &str) -> Money {
        Money {
            amount: amount.to_string(),
            currency_code: "USD".to_string(),
        }
    }

    #[test]
    fn test_normalize_product_matches_expected_shape() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": "gid://1",
            "handle": "tee",
            "tags": ["a"],
            "title": "Tee",
            "description": "d",
            "priceRange": { "maxVariantPrice": { "amount": "10.00", "currencyCode": "USD" } },
            "variants": { "edges": [
                { "node": {
                    "priceV2": { "amount": "10.00", "currencyCode": "USD" },
                    "availableForSale": true,
                    "title": "Default"
                } }
            ] },
            "images": { "edges": [] }
        }))
        .unwrap();

        let product = normalize_product(raw);

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({
                "id": "gid://1",
                "handle": "tee",
                "tags": ["a"],
                "title": "Tee",
                "description": "d",
                "price": { "amount": "10.00", "currencyCode": "USD" },
                "variants": [
                    {
                        "price": { "amount": "10.00", "currencyCode": "USD" },
                        "availableForSale": true,
                        "title": "Default"
                    }
                ],
                "images": []
            })
        );
    }

    #[test]
    fn test_product_price_is_max_variant_price() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": "gid://2",
            "handle": "hoodie",
            "title": "Hoodie",
            "priceRange": { "maxVariantPrice": { "amount": "59.99", "currencyCode": "CAD" } }
        }))
        .unwrap();
        let expected = raw.price_range.max_variant_price.clone();

        let product = normalize_product(raw);

        assert_eq!(product.price, expected);
        assert!(product.variants.is_empty());
        assert!(product.images.is_empty());
        assert!(product.collections.is_empty());
    }

    #[test]
    fn test_normalize_variant_keeps_every_other_field() {
        let raw = RawVariant {
            price_v2: usd("12.00"),
            available_for_sale: Some(false),
            quantity_available: Some(3),
            requires_shipping: Some(true),
            title: Some("M / Blue".to_string()),
            selected_options: vec![
                SelectedOption {
                    name: "Size".to_string(),
                    value: "M".to_string(),
                },
                SelectedOption {
                    name: "Color".to_string(),
                    value: "Blue".to_string(),
                },
            ],
        };

        let variant = normalize_variant(raw.clone());

        assert_eq!(variant.price, raw.price_v2);
        assert_eq!(variant.available_for_sale, raw.available_for_sale);
        assert_eq!(variant.quantity_available, raw.quantity_available);
        assert_eq!(variant.requires_shipping, raw.requires_shipping);
        assert_eq!(variant.title, raw.title);
        assert_eq!(variant.selected_options, raw.selected_options);
    }

    #[test]
    fn test_variants_keep_api_order() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": "gid://3",
            "handle": "cap",
            "title": "Cap",
            "priceRange": { "maxVariantPrice": { "amount": "20.00", "currencyCode": "USD" } },
            "variants": { "edges": [
                { "node": { "priceV2": { "amount": "15.00", "currencyCode": "USD" }, "title": "S" } },
                { "node": { "priceV2": { "amount": "20.00", "currencyCode": "USD" }, "title": "L" } }
            ] }
        }))
        .unwrap();

        let titles: Vec<_> = normalize_product(raw)
            .variants
            .into_iter()
            .map(|v| v.title.unwrap())
            .collect();

        assert_eq!(titles, vec!["S", "L"]);
    }

    #[test]
    fn test_missing_price_range_fails_to_decode() {
        let result: Result<RawProduct, _> = serde_json::from_value(json!({
            "id": "gid://4",
            "handle": "mug",
            "title": "Mug"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_product_collections_are_flattened() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": "gid://5",
            "handle": "socks",
            "title": "Socks",
            "priceRange": { "maxVariantPrice": { "amount": "5.00", "currencyCode": "USD" } },
            "collections": { "edges": [
                { "node": { "id": "gid://c/1", "handle": "apparel", "description": "", "title": "Apparel" } }
            ] }
        }))
        .unwrap();

        let product: Product = raw.into();

        assert_eq!(product.collections.len(), 1);
        assert_eq!(product.collections[0].handle, "apparel");
    }
}
