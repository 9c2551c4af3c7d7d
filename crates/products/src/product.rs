use serde::{Deserialize, Serialize};

use crate::field::{FieldValue, ProductField};
use crate::price::Price;

/// Product being edited in a tag designer session.
///
/// A draft has no identity; it only gets a `ProductId` once the persistence
/// boundary stores it. The identifier is arbitrary text and need not be numeric.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    name: String,
    price: Price,
    identifier: String,
    image_ref: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        identifier: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: Price::normalize(price),
            identifier: identifier.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Blank draft used by "New Tag".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    /// Replace a single attribute. Prices are normalized, text is stored verbatim.
    pub fn apply(&mut self, field: ProductField, value: FieldValue) {
        match field {
            ProductField::Name => self.name = value.into_text(),
            ProductField::Price => self.price = value.to_price(),
            ProductField::Identifier => self.identifier = value.into_text(),
            ProductField::ImageRef => self.image_ref = value.into_text(),
        }
    }
}
