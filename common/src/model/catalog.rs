use crate::model::product::Product;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shop identity stored alongside the products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
}

/// The `products.json` document.
///
/// Only `products` is required; `brand` and `last_updated` are written by the
/// tooling that maintains the file and are carried through untouched.
/// Entries of `products` that cannot be read as a [`Product`] (no `price`,
/// not an object) are logged and skipped; the rest of the list still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    #[serde(deserialize_with = "usable_products")]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

fn usable_products<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Product>, D::Error> {
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!("Skipping catalog entry {}: {}", index, e);
                None
            }
        })
        .collect())
}

impl CatalogDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let doc = CatalogDocument::from_slice(
            br#"{
                "brand": {"name": "VDR Candle Crafts", "tagline": "Handcrafted Candles for Every Moment"},
                "products": [
                    {"id": 1, "name": "Vanilla Glow", "price": 350, "burn_time": "30-40 hours"},
                    {"id": 2, "name": "Rose Garden", "price": 420, "original_price": 500}
                ],
                "last_updated": "2025-01-10T12:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(doc.brand.unwrap().name, "VDR Candle Crafts");
        assert_eq!(doc.products.len(), 2);
        assert_eq!(doc.products[0].burn_time.as_deref(), Some("30-40 hours"));
    }

    #[test]
    fn products_field_is_required() {
        assert!(CatalogDocument::from_slice(br#"{"brand": {"name": "x"}}"#).is_err());
        assert!(CatalogDocument::from_slice(br#"{"products": 3}"#).is_err());
    }

    #[test]
    fn unusable_entry_does_not_drop_the_rest() {
        let doc = CatalogDocument::from_slice(
            br#"{"products": [
                {"id": 1, "name": null, "price": 350},
                {"id": 2, "name": "No price"},
                "not a product",
                {"id": -5, "name": "Tealights", "price": "\u20b9120", "original_price": 0},
                {"name": "No id", "price": 99, "original_price": ""}
            ]}"#,
        )
        .unwrap();
        assert_eq!(doc.products.len(), 3);
        assert_eq!(doc.products[0].name, "");
        assert_eq!(doc.products[1].id.to_string(), "-5");
        assert_eq!(doc.products[1].original_price, None);
        assert_eq!(doc.products[2].id.to_string(), "");
        assert_eq!(doc.products[2].original_price, None);
    }
}
