//! Leaf records shared by products, variants and collections.

use serde::{Deserialize, Serialize};

/// A monetary amount (`MoneyV2`).
///
/// `amount` is the decimal string exactly as the API sent it (e.g. `"10.00"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount.
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// A product image, passed through unchanged from the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Original width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
    /// Original height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
    /// URL of the original upload.
    pub original_src: String,
    /// URL of the image transformed to WEBP.
    pub transformed_src: String,
    /// Alternative text.
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// A name/value option selected by a variant (e.g. `Size` / `M`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name.
    pub name: String,
    /// Option value.
    pub value: String,
}
