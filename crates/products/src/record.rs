use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tagforge_core::ProductId;

use crate::product::ProductDraft;

/// A product as returned by the persistence boundary.
///
/// Same shape as the draft that was sent, plus the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProduct {
    pub id: ProductId,
    #[serde(flatten)]
    pub product: ProductDraft,
    pub created_at: DateTime<Utc>,
}

impl StoredProduct {
    pub fn new(id: ProductId, product: ProductDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            product,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_flat() {
        let record = StoredProduct::new(
            ProductId::new(),
            ProductDraft::new("Mug", 8.5, "123", ""),
            Utc::now(),
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], record.id.to_string());
        assert_eq!(json["name"], "Mug");
        assert_eq!(json["identifier"], "123");
        assert!(json.get("product").is_none());
        assert!(json.get("createdAt").is_some());

        let back: StoredProduct = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
