//! Product records as they appear in the catalog document.
//!
//! The document is edited by hand and is never validated, so decoding is
//! lenient: an `id` may be any number or string (or absent), a price may be
//! a preformatted string or a bare number, and missing or `null` display
//! fields come through as empty text. A zero or empty `original_price`
//! counts as no discount.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Currency symbol prepended to bare numeric prices.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Identifier of a product, unique within one catalog load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => ProductId::Number(n),
            Value::String(s) => ProductId::Text(s),
            Value::Null => ProductId::default(),
            other => ProductId::Text(other.to_string()),
        })
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        ProductId::Number(value.into())
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

/// A display price.
///
/// `Formatted` values are shown verbatim. `Amount` values come from documents
/// that store plain numbers and are shown with [`DEFAULT_CURRENCY_SYMBOL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceTag {
    Amount(serde_json::Number),
    Formatted(String),
}

impl fmt::Display for PriceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceTag::Amount(n) => write!(f, "{}{}", DEFAULT_CURRENCY_SYMBOL, n),
            PriceTag::Formatted(s) => f.write_str(s),
        }
    }
}

impl PriceTag {
    /// Zero amounts and empty strings, which the page treats as no price.
    pub fn is_blank(&self) -> bool {
        match self {
            PriceTag::Amount(n) => n.as_f64() == Some(0.0),
            PriceTag::Formatted(s) => s.trim().is_empty(),
        }
    }
}

impl From<u64> for PriceTag {
    fn from(value: u64) -> Self {
        PriceTag::Amount(value.into())
    }
}

impl From<&str> for PriceTag {
    fn from(value: &str) -> Self {
        PriceTag::Formatted(value.to_string())
    }
}

/// One entry of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,

    #[serde(default, deserialize_with = "display_text")]
    pub name: String,

    #[serde(default, deserialize_with = "display_text")]
    pub category: String,

    #[serde(default, deserialize_with = "display_text")]
    pub description: String,

    pub price: PriceTag,

    /// Pre-discount price, shown struck through. Not compared with `price`.
    #[serde(
        default,
        deserialize_with = "discount_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<PriceTag>,

    /// Glyph shown when there is no image or the image fails to load.
    #[serde(default, deserialize_with = "display_text")]
    pub icon: String,

    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub burn_time: Option<String>,

    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub wax_type: Option<String>,

    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(default = "default_in_stock", deserialize_with = "stock_flag")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

/// Scalars as their text; `null` as `None`.
fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn display_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn discount_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<PriceTag>, D::Error> {
    Ok(Option::<PriceTag>::deserialize(deserializer)?.filter(|price| !price.is_blank()))
}

fn stock_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_in_stock))
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: &str,
        category: &str,
        description: &str,
        price: impl Into<PriceTag>,
        icon: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price: price.into(),
            original_price: None,
            icon: icon.to_string(),
            currency: None,
            burn_time: None,
            wax_type: None,
            size: None,
            in_stock: true,
        }
    }

    pub fn with_original_price(mut self, original: impl Into<PriceTag>) -> Self {
        self.original_price = Some(original.into());
        self
    }

    /// Non-empty attribute values (burn time, wax type, size) in display order.
    pub fn details(&self) -> Vec<&str> {
        [&self.burn_time, &self.wax_type, &self.size]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect()
    }
}
