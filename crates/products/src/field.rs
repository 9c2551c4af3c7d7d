//! Editable product fields and the values the form hands us.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use tagforge_core::DomainError;

use crate::price::Price;

/// One editable attribute of a product draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Name,
    Price,
    Identifier,
    ImageRef,
}

impl ProductField {
    pub const ALL: [ProductField; 4] = [
        ProductField::Name,
        ProductField::Price,
        ProductField::Identifier,
        ProductField::ImageRef,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Price => "price",
            ProductField::Identifier => "identifier",
            ProductField::ImageRef => "image_ref",
        }
    }
}

impl core::fmt::Display for ProductField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = DomainError;

    /// Accepts snake_case, camelCase and the form's legacy names
    /// (`barcode`, `imageUrl`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "name" => Ok(ProductField::Name),
            "price" => Ok(ProductField::Price),
            "identifier" | "barcode" => Ok(ProductField::Identifier),
            "imageref" | "imageurl" | "image" => Ok(ProductField::ImageRef),
            _ => Err(DomainError::validation(format!("unknown field '{}'", s.trim()))),
        }
    }
}

/// A raw value coming from an input control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Value as stored in a text field.
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(n) => n.to_string(),
        }
    }

    /// Value as a price; unparseable text becomes zero.
    pub fn to_price(&self) -> Price {
        match self {
            FieldValue::Number(n) => Price::normalize(*n),
            FieldValue::Text(s) => Price::parse_lenient(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}
