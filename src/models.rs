use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::constants::DEFAULT_PRODUCT_IMAGE;

/// Backend product identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An image attached to a product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// A product as served by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "number_or_string")]
    pub price: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub rating: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_images: Vec<ProductImage>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub is_in_stock: Option<bool>,
}

impl Product {
    /// Image shown first on the product card
    pub fn display_image(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_PRODUCT_IMAGE,
        }
    }

    /// Primary display image followed by the additional images, in order
    pub fn image_sequence(&self) -> Vec<CardImage> {
        let mut images = Vec::with_capacity(1 + self.additional_images.len());
        images.push(CardImage {
            url: self.display_image().to_string(),
            alt: self.name.clone(),
        });
        images.extend(self.additional_images.iter().map(|img| CardImage {
            url: img.image_url.clone().unwrap_or_default(),
            alt: img.alt_text.clone().unwrap_or_default(),
        }));
        images
    }
}

/// One entry of a card's image carousel
#[derive(Clone, Debug, PartialEq)]
pub struct CardImage {
    pub url: String,
    pub alt: String,
}

/// Decimal fields arrive either as JSON numbers or as strings like "19.99"
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null(()),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {:?}", s))),
        Raw::Null(()) => Ok(0.0),
    }
}

/// `null` decodes to the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decimal_strings_are_accepted() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Desk Lamp",
            "category": "Home tools",
            "price": "24.50",
            "rating": "4.20",
            "image_url": "http://localhost:8000/media/lamp.png"
        }))
        .unwrap();
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.price, 24.5);
        assert_eq!(product.rating, 4.2);
        assert!(product.additional_images.is_empty());
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let product: Product = serde_json::from_value(json!({
            "id": 1, "name": "Tea", "category": "Food", "price": 3, "rating": 5,
            "image_url": null
        }))
        .unwrap();
        assert_eq!(product.display_image(), DEFAULT_PRODUCT_IMAGE);
    }

    #[test]
    fn test_image_sequence_starts_with_display_image() {
        let product: Product = serde_json::from_value(json!({
            "id": 2, "name": "TV", "category": "Electronics", "price": 499.0, "rating": 4.5,
            "image_url": "front.png",
            "additional_images": [
                {"id": 10, "image_url": "side.png", "alt_text": "Side view", "is_primary": false},
                {"id": 11, "image_url": "back.png", "alt_text": "Back view"}
            ]
        }))
        .unwrap();
        let images = product.image_sequence();
        assert_eq!(images.len(), 3);
        assert_eq!(images[0], CardImage { url: "front.png".into(), alt: "TV".into() });
        assert_eq!(images[2].alt, "Back view");
    }

    #[test]
    fn test_null_text_fields_decode_as_empty() {
        let product: Product = serde_json::from_value(json!({
            "id": 4, "name": null, "category": null, "price": 10, "additional_images": null
        }))
        .unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.category, "");
        assert!(product.additional_images.is_empty());
    }

    #[test]
    fn test_invalid_decimal_is_rejected() {
        let result = serde_json::from_value::<Product>(json!({
            "id": 3, "name": "Bad", "price": "free"
        }));
        assert!(result.is_err());
    }
}
