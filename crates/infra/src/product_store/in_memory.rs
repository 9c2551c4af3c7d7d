use std::sync::RwLock;

use chrono::Utc;

use tagforge_core::ProductId;
use tagforge_products::{ProductDraft, StoredProduct};

use super::ProductStore;
use crate::error::BoundaryError;

/// In-memory product store.
///
/// Intended for tests/dev and the terminal shell. Records are kept in insertion
/// order; lookups are linear.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    records: RwLock<Vec<StoredProduct>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn create(&self, product: ProductDraft) -> Result<StoredProduct, BoundaryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| BoundaryError::unavailable("product store lock poisoned"))?;

        let stored = StoredProduct::new(ProductId::new(), product, Utc::now());
        records.push(stored.clone());

        tracing::debug!(product_id = %stored.id, total = records.len(), "product stored");
        Ok(stored)
    }

    fn get(&self, id: ProductId) -> Result<Option<StoredProduct>, BoundaryError> {
        let records = self
            .records
            .read()
            .map_err(|_| BoundaryError::unavailable("product store lock poisoned"))?;

        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<StoredProduct>, BoundaryError> {
        let records = self
            .records
            .read()
            .map_err(|_| BoundaryError::unavailable("product store lock poisoned"))?;

        Ok(records.clone())
    }
}
