//! Product Model

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AppError, AppResult, ErrorCode};

/// Product entity (catalog entry, independent of physical stock)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Barcode, unique per product
    #[serde(rename = "_id")]
    pub barcode: String,
    #[serde(rename = "tipo")]
    pub category: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Available-quantity counter maintained by the inventory service
    #[serde(rename = "cantidad_items_disponibles", default)]
    pub available_quantity: u32,
    #[serde(
        rename = "atributos",
        default,
        skip_serializing_if = "ProductAttributes::is_empty"
    )]
    pub attributes: ProductAttributes,
}

impl Product {
    pub fn new(
        barcode: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            barcode: barcode.into(),
            category: category.into(),
            name: name.into(),
            description: String::new(),
            price,
            available_quantity: 0,
            attributes: ProductAttributes::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks run before the product is sent to the inventory service
    pub fn validate(&self) -> AppResult<()> {
        if self.barcode.trim().is_empty() {
            return Err(AppError::required("codigo_barras"));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::required("nombre"));
        }
        if self.price < Decimal::ZERO {
            return Err(AppError::with_message(
                ErrorCode::ProductInvalidPrice,
                format!("price must not be negative: {}", self.price),
            ));
        }
        Ok(())
    }
}

/// Open-ended product attributes
///
/// An ordered list of key/value pairs with unique keys. Encoded on the wire as
/// a JSON object; decoding keeps the document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductAttributes(Vec<(String, String)>);

impl ProductAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key/value pair. Rejects empty and duplicate keys.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> AppResult<()> {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::new(ErrorCode::AttributeKeyEmpty));
        }
        if self.contains_key(key) {
            return Err(AppError::with_message(
                ErrorCode::AttributeDuplicateKey,
                format!("attribute '{}' already exists", key),
            )
            .with_detail("key", key));
        }
        self.0.push((key.to_string(), value.into()));
        Ok(())
    }

    /// Remove a key, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(pos).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace or append, used when decoding where the last occurrence wins
    fn upsert(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }
}

impl Serialize for ProductAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProductAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = ProductAttributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of attribute names to values")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(ProductAttributes::default())
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(ProductAttributes::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut attrs = ProductAttributes::default();
                while let Some((key, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    // Values are free-form on the wire; non-strings keep their JSON text
                    let value = match value {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    attrs.upsert(key, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_any(AttributesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut attrs = ProductAttributes::new();
        attrs.insert("talla", "M").unwrap();
        attrs.insert("color", "rojo").unwrap();
        attrs.insert("material", "algodón").unwrap();

        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["talla", "color", "material"]);
    }

    #[test]
    fn test_attributes_reject_duplicates_and_empty_keys() {
        let mut attrs = ProductAttributes::new();
        attrs.insert("talla", "M").unwrap();

        let err = attrs.insert("talla", "L").unwrap_err();
        assert_eq!(err.code, ErrorCode::AttributeDuplicateKey);
        assert_eq!(attrs.get("talla"), Some("M"));

        let err = attrs.insert("   ", "x").unwrap_err();
        assert_eq!(err.code, ErrorCode::AttributeKeyEmpty);
    }

    #[test]
    fn test_attributes_remove() {
        let mut attrs = ProductAttributes::new();
        attrs.insert("talla", "M").unwrap();
        attrs.insert("color", "azul").unwrap();

        assert_eq!(attrs.remove("talla"), Some("M".to_string()));
        assert_eq!(attrs.remove("talla"), None);
        assert_eq!(attrs.len(), 1);
        // Key can be added again once removed
        attrs.insert("talla", "S").unwrap();
    }

    #[test]
    fn test_product_wire_format() {
        let json = r#"{
            "_id": "7701234567890",
            "tipo": "Ropa",
            "nombre": "Camiseta",
            "descripcion": "Manga corta",
            "precio": 19.99,
            "cantidad_items_disponibles": 12,
            "atributos": {"talla": "M", "peso": 0.2, "color": "rojo"}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.barcode, "7701234567890");
        assert_eq!(product.price, Decimal::from_str("19.99").unwrap());
        assert_eq!(product.available_quantity, 12);
        let keys: Vec<_> = product.attributes.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["talla", "peso", "color"]);
        assert_eq!(product.attributes.get("peso"), Some("0.2"));

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["nombre"], "Camiseta");
        assert_eq!(value["atributos"]["talla"], "M");
    }

    #[test]
    fn test_product_null_attributes() {
        let json = r#"{"_id":"1","tipo":"t","nombre":"n","precio":1.0,"atributos":null}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.attributes.is_empty());
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_product_validate() {
        let ok = Product::new("SKU-001", "Camiseta", "Ropa", Decimal::new(1999, 2));
        assert!(ok.validate().is_ok());

        let free = Product::new("SKU-002", "Muestra", "Ropa", Decimal::ZERO);
        assert!(free.validate().is_ok());

        let negative = Product::new("SKU-003", "Camiseta", "Ropa", Decimal::new(-1, 0));
        assert_eq!(
            negative.validate().unwrap_err().code,
            ErrorCode::ProductInvalidPrice
        );

        let unnamed = Product::new("SKU-004", " ", "Ropa", Decimal::ONE);
        assert_eq!(unnamed.validate().unwrap_err().code, ErrorCode::RequiredField);
    }
}
