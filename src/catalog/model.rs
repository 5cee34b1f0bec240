// catalog/model.rs - Product data model shared by client and server
//
// Remote catalogs are loosely typed: ids may be numbers or strings and a
// price may arrive as a number or as pre-formatted text. Both shapes are
// kept as-is instead of being coerced. Optional fields of the wrong JSON type
// decode as absent so one odd record never fails the whole response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Product identifier as supplied by the data source.
///
/// `Other` keeps numbers that do not fit an `i64`, such as `1.0` or
/// `18446744073709551615`, exactly as they were sent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
    Other(serde_json::Number),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
            ProductId::Other(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value)
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        ProductId::Number(i64::from(value))
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

/// Product price, numeric or free text.
///
/// `Display` renders numbers with exactly two decimals and text verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(value) => write!(f, "{value:.2}"),
            Price::Text(text) => f.write_str(text),
        }
    }
}

impl From<Value> for Price {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or_else(Price::default, Price::Number),
            Value::String(text) => Price::Text(text),
            _ => Price::default(),
        }
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Number(value)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Price::Text(value.to_string())
    }
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Price, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Price::from)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn lenient_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

/// A catalog entry.
///
/// Only `id` is mandatory when decoding. Everything else tolerates absence so
/// a single sparse record does not discard an otherwise usable response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "lenient_title")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Price,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            price: price.into(),
            category: None,
            image: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Price as shown on a product card.
    pub fn price_display(&self) -> String {
        self.price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_price_two_decimals() {
        assert_eq!(Price::Number(19.5).to_string(), "19.50");
        assert_eq!(Price::Number(79.99).to_string(), "79.99");
        assert_eq!(Price::Number(10.0).to_string(), "10.00");
        assert_eq!(Price::Number(0.0).to_string(), "0.00");
    }

    #[test]
    fn test_text_price_verbatim() {
        assert_eq!(Price::from("Contact us").to_string(), "Contact us");
        // Numeric-looking text is still text
        assert_eq!(Price::from("19.5").to_string(), "19.5");
        assert_eq!(Price::default().to_string(), "");
    }

    #[test]
    fn test_price_deserializes_both_shapes() {
        let number: Price = serde_json::from_str("109.95").unwrap();
        assert_eq!(number, Price::Number(109.95));

        let integer: Price = serde_json::from_str("15").unwrap();
        assert_eq!(integer, Price::Number(15.0));
        assert_eq!(integer.to_string(), "15.00");

        let text: Price = serde_json::from_str("\"On request\"").unwrap();
        assert_eq!(text, Price::Text("On request".to_string()));
    }

    #[test]
    fn test_product_id_shapes() {
        let numeric: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(numeric, ProductId::Number(7));
        assert_eq!(numeric.to_string(), "7");

        let text: ProductId = serde_json::from_str("\"sku-42\"").unwrap();
        assert_eq!(text, ProductId::Text("sku-42".to_string()));
        assert_eq!(text.to_string(), "sku-42");
    }

    #[test]
    fn test_product_decodes_remote_shape() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://example.com/backpack.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Number(1));
        assert_eq!(product.title, "Fjallraven Backpack");
        assert_eq!(product.price_display(), "109.95");
        assert_eq!(product.category.as_deref(), Some("men's clothing"));
        assert_eq!(product.image.as_deref(), Some("https://example.com/backpack.jpg"));
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        let product: Product = serde_json::from_str(r#"{"id": "a1", "price": "Contact us"}"#).unwrap();
        assert_eq!(product.id, ProductId::Text("a1".to_string()));
        assert_eq!(product.title, "");
        assert!(product.description.is_none());
        assert!(product.category.is_none());
        assert!(product.image.is_none());
        assert_eq!(product.price_display(), "Contact us");
    }

    #[test]
    fn test_product_requires_id() {
        let result: Result<Product, _> = serde_json::from_str(r#"{"title": "No id", "price": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_and_mistyped_fields_decode_as_absent() {
        let json = r#"{
            "id": 2,
            "title": null,
            "price": null,
            "description": 12,
            "category": 3,
            "image": false
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.title, "");
        assert_eq!(product.price, Price::default());
        assert_eq!(product.price_display(), "");
        assert!(product.description.is_none());
        assert!(product.category.is_none());
        assert!(product.image.is_none());
    }

    #[test]
    fn test_price_of_unexpected_shape_is_empty() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "price": {"amount": 5}}"#).unwrap();
        assert_eq!(product.price_display(), "");
    }

    #[test]
    fn test_product_id_outside_i64() {
        let float: ProductId = serde_json::from_str("1.0").unwrap();
        assert!(matches!(float, ProductId::Other(_)));
        assert_eq!(float.to_string(), "1.0");

        let huge: ProductId = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(huge, ProductId::Other(_)));
        assert_eq!(huge.to_string(), "18446744073709551615");

        let negative: ProductId = serde_json::from_str("-4").unwrap();
        assert_eq!(negative, ProductId::Number(-4));
    }

    #[test]
    fn test_builder_helpers() {
        let product = Product::new(3, "Yoga Mat", 39.99)
            .with_description("Non-slip")
            .with_category("Sports")
            .with_image("/img/mat.png");

        assert_eq!(product.id, ProductId::Number(3));
        assert_eq!(product.description.as_deref(), Some("Non-slip"));
        assert_eq!(product.category.as_deref(), Some("Sports"));
        assert_eq!(product.image.as_deref(), Some("/img/mat.png"));
    }
}
